use chrono::Utc;
use uuid::Uuid;

use crate::modules::order::application::domain::entities::{Order, OrderStatus};
use crate::modules::order::application::ports::outgoing::{CustomerSummary, OrderWithCustomer};

pub fn sample_order(owner: Uuid, status: OrderStatus) -> Order {
    let now = Utc::now();
    Order {
        id: Uuid::new_v4(),
        user_id: owner,
        student_name: "Budi Santoso".to_string(),
        student_id: "2201234567".to_string(),
        university: "Universitas Terbuka".to_string(),
        program: "Manajemen".to_string(),
        semester: "3".to_string(),
        task_link: "https://elearning.ut.ac.id/mod/assign/view.php?id=1".to_string(),
        sso_username: "budi".to_string(),
        sso_password: "rahasia".to_string(),
        course_name: "Pengantar Akuntansi".to_string(),
        title: "Tugas 1".to_string(),
        instructions: "Kerjakan semua soal".to_string(),
        status,
        price: 10_007,
        payment_proof: None,
        created_at: now,
        updated_at: now,
    }
}

/// An order joined with its owner, as the admin views return it.
pub fn sample_row(status: OrderStatus) -> OrderWithCustomer {
    let owner = Uuid::new_v4();
    OrderWithCustomer {
        order: sample_order(owner, status),
        customer: Some(CustomerSummary {
            id: owner,
            email: "budi@kampus.ac.id".to_string(),
            username: Some("budi".to_string()),
            name: Some("Budi Santoso".to_string()),
        }),
    }
}
