pub mod memory;
pub mod search;
pub mod seed;

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeSearch, EmployeeUpdate, NewEmployee};

pub use memory::MemStorage;

/// CRUD and search over employee records.
///
/// A missing id is reported through `None`/`false`. `Err` is reserved for
/// a store that can no longer be used.
pub trait Storage: Send + Sync {
    fn list(&self) -> Result<Vec<Employee>, AppError>;
    fn get(&self, id: i32) -> Result<Option<Employee>, AppError>;
    fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError>;
    fn update(&self, id: i32, update: EmployeeUpdate) -> Result<Option<Employee>, AppError>;
    fn delete(&self, id: i32) -> Result<bool, AppError>;

    fn search(&self, criteria: &EmployeeSearch) -> Result<Vec<Employee>, AppError> {
        Ok(search::filter_employees(self.list()?, criteria))
    }
}

pub fn create_store(seed_sample_data: bool) -> MemStorage {
    let store = MemStorage::new();
    if seed_sample_data {
        let today = chrono::Utc::now().date_naive();
        for new_employee in seed::sample_employees(today) {
            // A fresh store cannot be poisoned yet.
            if let Err(err) = store.create(new_employee) {
                log::error!("failed to seed sample employee: {}", err);
            }
        }
    }
    store
}
