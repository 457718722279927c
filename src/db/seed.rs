use chrono::{DateTime, Datelike, NaiveDate, Utc};
use crate::models::employee::NewEmployee;

// Sample directory loaded at startup for development.
pub fn sample_employees(today: NaiveDate) -> Vec<NewEmployee> {
    let year = today.year();

    vec![
        NewEmployee {
            name: "Sarah Johnson".to_string(),
            role: "Senior Developer".to_string(),
            department: "Engineering".to_string(),
            city: "San Francisco".to_string(),
            email: "sarah.johnson@example.com".to_string(),
            phone: Some("(555) 123-4567".to_string()),
            join_date: midnight(year - 2, 1, 15),
            about: Some("Sarah is an experienced developer specializing in frontend technologies with over 8 years of industry experience. She has led multiple projects from concept to completion, focusing on React and modern JavaScript frameworks. Sarah is passionate about creating responsive and accessible web applications, and mentors junior developers on the team.".to_string()),
        },
        NewEmployee {
            name: "Michael Chen".to_string(),
            role: "Product Manager".to_string(),
            department: "Product".to_string(),
            city: "New York".to_string(),
            email: "michael.chen@example.com".to_string(),
            phone: Some("(555) 234-5678".to_string()),
            join_date: midnight(year - 1, 3, 22),
            about: Some("Product strategist with expertise in market analysis, agile methodologies, and cross-functional team leadership. Michael has successfully launched multiple products that increased company revenue by 30%.".to_string()),
        },
        NewEmployee {
            name: "Jessica Williams".to_string(),
            role: "UX Designer".to_string(),
            department: "Design".to_string(),
            city: "Austin".to_string(),
            email: "jessica.williams@example.com".to_string(),
            phone: Some("(555) 345-6789".to_string()),
            join_date: midnight(year - 1, 8, 10),
            about: Some("Creative designer focused on user-centered experiences, with skills in prototyping, user research and visual design. Jessica has led the redesign of the company's flagship product, resulting in a 45% increase in user engagement.".to_string()),
        },
        NewEmployee {
            name: "David Rodriguez".to_string(),
            role: "Marketing Specialist".to_string(),
            department: "Marketing".to_string(),
            city: "Chicago".to_string(),
            email: "david.rodriguez@example.com".to_string(),
            phone: Some("(555) 456-7890".to_string()),
            join_date: midnight(year - 1, 10, 5),
            about: Some("Strategic marketer with experience in digital campaigns, content creation, and brand development across multiple channels. David has executed campaigns that generated a 25% increase in qualified leads.".to_string()),
        },
    ]
}

// Seed dates are fixed calendar days, always valid.
fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}
