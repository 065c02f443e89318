use crate::domain::model::{Address, Employee, PackageRecord};
use crate::domain::ports::Directory;
use std::sync::Mutex;

/// In-memory directory and ledger. The employee registry is fixed at
/// construction; the ledger is append-only behind a mutex so each submission's
/// write is indivisible while reads hand out cloned snapshots.
pub struct InMemoryDirectory {
    employees: Vec<Employee>,
    ledger: Mutex<Vec<PackageRecord>>,
}

impl InMemoryDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees,
            ledger: Mutex::new(Vec::new()),
        }
    }

    /// Directory preloaded with the standard ten-employee registry.
    pub fn with_seed() -> Self {
        Self::new(seed_employees())
    }
}

impl Directory for InMemoryDirectory {
    fn find_employee(&self, id: &str) -> Option<Employee> {
        self.employees.iter().find(|e| e.id == id).cloned()
    }

    fn employees(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    fn append_package(&self, record: PackageRecord) {
        let mut ledger = self.ledger.lock().unwrap_or_else(|e| e.into_inner());
        ledger.push(record);
    }

    fn packages(&self) -> Vec<PackageRecord> {
        let ledger = self.ledger.lock().unwrap_or_else(|e| e.into_inner());
        ledger.clone()
    }
}

fn employee(id: &str, first: &str, last: &str, age: u32, street: &str, city: &str, state: &str, zip: &str) -> Employee {
    Employee {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        age,
        address: Address {
            id: id.to_string(),
            street: street.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip_code: zip.to_string(),
        },
    }
}

fn seed_employees() -> Vec<Employee> {
    vec![
        employee("AP001", "John", "Doe", 28, "123 Elm St", "Springfield", "IL", "62701"),
        employee("AP002", "Jane", "Smith", 34, "456 Maple Ave", "Atlanta", "GA", "30301"),
        employee("AP003", "Alice", "Johnson", 29, "789 Oak St", "Seattle", "WA", "98101"),
        employee("AP004", "Bob", "Brown", 45, "101 Pine St", "Dallas", "TX", "75201"),
        employee("AP005", "Charlie", "Davis", 37, "202 Cedar St", "Miami", "FL", "33101"),
        employee("AP006", "Eva", "Garcia", 41, "303 Walnut St", "Boston", "MA", "02101"),
        employee("AP007", "Frank", "Martinez", 22, "404 Birch St", "Phoenix", "AZ", "85001"),
        employee("AP008", "Grace", "Hernandez", 31, "505 Cherry St", "Philadelphia", "PA", "19101"),
        employee("AP009", "Hannah", "Lee", 26, "606 Spruce St", "San Francisco", "CA", "94101"),
        employee("AP010", "David", "Wilson", 39, "707 Ash St", "Chicago", "IL", "60601"),
    ]
}
