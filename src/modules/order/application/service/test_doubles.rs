//! In-memory order store shared by the service tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::{Order, OrderStatus};
use crate::modules::order::application::ports::outgoing::{
    CreateOrderData, CustomerSummary, OrderListFilter, OrderQuery, OrderQueryError,
    OrderRepository, OrderRepositoryError, OrderSort, OrderWithCustomer, PaymentCodeGenerator,
};

#[derive(Clone, Default)]
pub(crate) struct InMemoryOrders {
    orders: Arc<Mutex<Vec<Order>>>,
    customers: Arc<Vec<CustomerSummary>>,
    fail: bool,
}

impl InMemoryOrders {
    pub(crate) fn with(orders: Vec<Order>) -> Self {
        Self {
            orders: Arc::new(Mutex::new(orders)),
            ..Default::default()
        }
    }

    pub(crate) fn with_customers(mut self, customers: Vec<CustomerSummary>) -> Self {
        self.customers = Arc::new(customers);
        self
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub(crate) fn snapshot(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), OrderQueryError> {
        if self.fail {
            return Err(OrderQueryError::DatabaseError("db down".to_string()));
        }
        Ok(())
    }

    fn attach(&self, order: Order) -> OrderWithCustomer {
        let customer = self.customers.iter().find(|c| c.id == order.user_id).cloned();
        OrderWithCustomer { order, customer }
    }

    fn select(&self, filter: &OrderListFilter) -> Vec<Order> {
        let mut rows: Vec<Order> = self
            .snapshot()
            .into_iter()
            .filter(|o| filter.owner.map_or(true, |owner| o.user_id == owner.value()))
            .filter(|o| {
                filter
                    .statuses
                    .as_ref()
                    .map_or(true, |statuses| statuses.contains(&o.status))
            })
            .collect();

        match filter.sort {
            OrderSort::Newest => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            OrderSort::Oldest => rows.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            OrderSort::RecentlyUpdated => rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        }

        if let Some(limit) = filter.limit {
            rows.truncate(limit as usize);
        }
        rows
    }

    fn mutate(
        &self,
        order_id: Uuid,
        owner: Option<UserId>,
        apply: impl FnOnce(&mut Order),
    ) -> Result<Order, OrderRepositoryError> {
        if self.fail {
            return Err(OrderRepositoryError::DatabaseError("db down".to_string()));
        }
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id && owner.map_or(true, |w| o.user_id == w.value()))
            .ok_or(OrderRepositoryError::NotFound)?;
        apply(order);
        order.updated_at = Utc::now();
        Ok(order.clone())
    }
}

#[async_trait]
impl OrderQuery for InMemoryOrders {
    async fn get_by_id(&self, order_id: Uuid) -> Result<Option<Order>, OrderQueryError> {
        self.check()?;
        Ok(self.snapshot().into_iter().find(|o| o.id == order_id))
    }

    async fn get_owned(
        &self,
        owner: UserId,
        order_id: Uuid,
    ) -> Result<Option<Order>, OrderQueryError> {
        self.check()?;
        Ok(self
            .snapshot()
            .into_iter()
            .find(|o| o.id == order_id && o.user_id == owner.value()))
    }

    async fn get_with_customer(
        &self,
        order_id: Uuid,
    ) -> Result<Option<OrderWithCustomer>, OrderQueryError> {
        Ok(self.get_by_id(order_id).await?.map(|o| self.attach(o)))
    }

    async fn list(&self, filter: OrderListFilter) -> Result<Vec<Order>, OrderQueryError> {
        self.check()?;
        Ok(self.select(&filter))
    }

    async fn list_with_customer(
        &self,
        filter: OrderListFilter,
    ) -> Result<Vec<OrderWithCustomer>, OrderQueryError> {
        self.check()?;
        Ok(self
            .select(&filter)
            .into_iter()
            .map(|o| self.attach(o))
            .collect())
    }

    async fn count_by_status(
        &self,
        statuses: &[OrderStatus],
        created_before: Option<DateTime<Utc>>,
    ) -> Result<u64, OrderQueryError> {
        self.check()?;
        Ok(self
            .snapshot()
            .iter()
            .filter(|o| statuses.contains(&o.status))
            .filter(|o| created_before.map_or(true, |t| o.created_at < t))
            .count() as u64)
    }

    async fn sum_price(&self, statuses: &[OrderStatus]) -> Result<i64, OrderQueryError> {
        self.check()?;
        Ok(self
            .snapshot()
            .iter()
            .filter(|o| statuses.contains(&o.status))
            .map(|o| o.price)
            .sum())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn create_order(&self, data: CreateOrderData) -> Result<Order, OrderRepositoryError> {
        if self.fail {
            return Err(OrderRepositoryError::DatabaseError("db down".to_string()));
        }
        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            user_id: data.owner.value(),
            student_name: data.student_name,
            student_id: data.student_id,
            university: data.university,
            program: data.program,
            semester: data.semester,
            task_link: data.task_link,
            sso_username: data.sso_username,
            sso_password: data.sso_password,
            course_name: data.course_name,
            title: data.title,
            instructions: data.instructions,
            status: data.status,
            price: data.price,
            payment_proof: data.payment_proof,
            created_at: now,
            updated_at: now,
        };
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn update_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrderRepositoryError> {
        self.mutate(order_id, None, |o| o.status = status)
    }

    async fn record_payment(
        &self,
        order_id: Uuid,
        owner: UserId,
        payment_proof: String,
    ) -> Result<Order, OrderRepositoryError> {
        self.mutate(order_id, Some(owner), |o| {
            o.status = OrderStatus::Paid;
            o.payment_proof = Some(payment_proof);
        })
    }
}

pub(crate) struct FixedCodes {
    pub unique_code: i64,
    pub simulation_reference: u32,
}

impl PaymentCodeGenerator for FixedCodes {
    fn unique_code(&self) -> i64 {
        self.unique_code
    }

    fn simulation_reference(&self) -> u32 {
        self.simulation_reference
    }
}

/// Order created `minutes_ago` minutes before now.
pub(crate) fn order(owner: Uuid, status: OrderStatus, price: i64, minutes_ago: i64) -> Order {
    let created_at = Utc::now() - Duration::minutes(minutes_ago);
    Order {
        id: Uuid::new_v4(),
        user_id: owner,
        student_name: "Budi Santoso".to_string(),
        student_id: "2201001".to_string(),
        university: "Universitas Terbuka".to_string(),
        program: "Manajemen".to_string(),
        semester: "3".to_string(),
        task_link: "https://elearning.ut.ac.id/task/1".to_string(),
        sso_username: "budi".to_string(),
        sso_password: "rahasia".to_string(),
        course_name: "Statistika".to_string(),
        title: "Tugas 1".to_string(),
        instructions: String::new(),
        status,
        price,
        payment_proof: None,
        created_at,
        updated_at: created_at,
    }
}

pub(crate) fn customer(id: Uuid, email: &str) -> CustomerSummary {
    CustomerSummary {
        id,
        email: email.to_string(),
        username: email.split('@').next().map(str::to_string),
        name: None,
    }
}
