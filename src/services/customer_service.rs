//! Customer directory - owner of every customer record.
//!
//! Customers are keyed by cpf for constant-time lookup. A separate index
//! keeps insertion order so listings come back in the order accounts were
//! opened. The raw collections are never exposed; all mutation goes
//! through the methods below.

use std::collections::HashMap;

use crate::{error::AppError, models::customer::Customer};

#[derive(Debug, Default)]
pub struct CustomerDirectory {
    customers: HashMap<String, Customer>,
    order: Vec<String>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Register a new customer.
    ///
    /// # Errors
    ///
    /// - `DuplicateCustomer`: the cpf is already registered (directory untouched)
    pub fn insert(&mut self, cpf: String, name: String) -> Result<&Customer, AppError> {
        if self.customers.contains_key(&cpf) {
            return Err(AppError::DuplicateCustomer);
        }

        let customer = Customer::new(cpf.clone(), name);
        tracing::info!(customer_id = %customer.id, cpf = %cpf, "customer registered");

        self.order.push(cpf.clone());
        Ok(self.customers.entry(cpf).or_insert(customer))
    }

    pub fn find_by_tax_id(&self, cpf: &str) -> Option<&Customer> {
        self.customers.get(cpf)
    }

    pub fn find_by_tax_id_mut(&mut self, cpf: &str) -> Option<&mut Customer> {
        self.customers.get_mut(cpf)
    }

    /// Rename a customer. No other field changes.
    pub fn update_name(&mut self, cpf: &str, name: String) -> Result<&Customer, AppError> {
        let customer = self
            .customers
            .get_mut(cpf)
            .ok_or(AppError::CustomerNotFound)?;
        customer.name = name;
        Ok(customer)
    }

    /// Remove a previously resolved customer, statement included.
    ///
    /// # Errors
    ///
    /// - `DirectoryInconsistency`: the cpf is not registered. Callers only
    ///   remove customers they already resolved, so a miss is a logic error.
    pub fn remove(&mut self, cpf: &str) -> Result<Customer, AppError> {
        let customer = self
            .customers
            .remove(cpf)
            .ok_or_else(|| AppError::DirectoryInconsistency(cpf.to_string()))?;
        self.order.retain(|key| key != cpf);

        tracing::info!(customer_id = %customer.id, cpf = %cpf, "customer removed");
        Ok(customer)
    }

    /// All customers in insertion order.
    pub fn list(&self) -> Vec<&Customer> {
        self.order
            .iter()
            .filter_map(|cpf| self.customers.get(cpf))
            .collect()
    }
}
