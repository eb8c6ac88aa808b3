use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::customer::{repo::seaorm::SeaOrmCustomerRepository, CustomerService};
use service::employee::{repo::seaorm::SeaOrmEmployeeRepository, EmployeeService};

#[derive(Clone)]
pub struct ServerState {
    pub customers: CustomerService,
    pub employees: EmployeeService,
}

impl ServerState {
    pub fn new(customers: CustomerService, employees: EmployeeService) -> Self {
        Self { customers, employees }
    }

    /// Services backed by SeaORM repositories sharing one connection pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        let customers = CustomerService::new(Arc::new(SeaOrmCustomerRepository { db: db.clone() }));
        let employees = EmployeeService::new(Arc::new(SeaOrmEmployeeRepository { db }));
        Self::new(customers, employees)
    }
}
