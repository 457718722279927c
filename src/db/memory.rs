use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use log::{debug, info, warn};
use crate::db::Storage;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeUpdate, NewEmployee};

struct Records {
    employees: BTreeMap<i32, Employee>,
    next_id: i32,
}

pub struct MemStorage {
    records: Mutex<Records>,
}

impl MemStorage {
    pub fn new() -> Self {
        MemStorage {
            records: Mutex::new(Records {
                employees: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Records>, AppError> {
        self.records
            .lock()
            .map_err(|err| AppError::InternalServerError(err.to_string()))
    }

    #[cfg(test)]
    fn with_next_id(next_id: i32) -> Self {
        MemStorage {
            records: Mutex::new(Records {
                employees: BTreeMap::new(),
                next_id,
            }),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemStorage {
    fn list(&self) -> Result<Vec<Employee>, AppError> {
        let records = self.lock()?;
        Ok(records.employees.values().cloned().collect())
    }

    fn get(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let records = self.lock()?;
        Ok(records.employees.get(&id).cloned())
    }

    fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError> {
        let mut records = self.lock()?;
        let id = records.next_id;
        records.next_id = id.checked_add(1).ok_or_else(|| {
            AppError::InternalServerError("employee id space exhausted".to_string())
        })?;

        let employee = Employee::from_new(id, new_employee);
        records.employees.insert(id, employee.clone());
        info!("Created employee {} ({})", id, employee.name);
        Ok(employee)
    }

    fn update(&self, id: i32, update: EmployeeUpdate) -> Result<Option<Employee>, AppError> {
        let mut records = self.lock()?;
        let Some(existing) = records.employees.remove(&id) else {
            return Ok(None);
        };

        let updated = existing.merge(update);
        records.employees.insert(id, updated.clone());
        info!("Updated employee {} ({})", id, updated.name);
        Ok(Some(updated))
    }

    fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut records = self.lock()?;
        match records.employees.remove(&id) {
            Some(employee) => {
                info!("Deleted employee {} ({})", id, employee.name);
                debug!(
                    "Remaining employee ids: {:?}",
                    records.employees.keys().collect::<Vec<_>>()
                );
                Ok(true)
            }
            None => {
                warn!("Cannot delete: employee {} not found", id);
                Ok(false)
            }
        }
    }
}
