use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create orders table
        // =====================================================
        manager.create_table(orders_table()).await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Customer dashboard
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_orders_user_id_created_at
                ON orders (user_id, created_at DESC);
                "#,
            )
            .await?;

        // Queue counting: status IN ('PAID','PROCESSED') AND created_at < $1
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_orders_status_created_at
                ON orders (status, created_at);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE orders
                ADD CONSTRAINT chk_orders_status
                CHECK (status IN ('DRAFT', 'PENDING', 'PAID', 'PROCESSED', 'COMPLETED', 'UNPAID'));
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_orders_updated_at
                BEFORE UPDATE ON orders
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_orders_updated_at ON orders;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_orders_user_id_created_at;
                DROP INDEX IF EXISTS idx_orders_status_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

/// Free-form order fields are unbounded `text`; only the status has a fixed width.
fn orders_table() -> TableCreateStatement {
    Table::create()
        .table(Orders::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Orders::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Orders::UserId).uuid().not_null())
        .col(ColumnDef::new(Orders::StudentName).text().not_null())
        .col(ColumnDef::new(Orders::StudentId).text().not_null())
        .col(ColumnDef::new(Orders::University).text().not_null())
        .col(ColumnDef::new(Orders::Program).text().not_null())
        .col(ColumnDef::new(Orders::Semester).text().not_null())
        .col(ColumnDef::new(Orders::TaskLink).text().not_null())
        // Stored as entered; never hashed
        .col(ColumnDef::new(Orders::SsoUsername).text().not_null().default(""))
        .col(ColumnDef::new(Orders::SsoPassword).text().not_null().default(""))
        .col(ColumnDef::new(Orders::CourseName).text().not_null())
        .col(ColumnDef::new(Orders::Title).text().not_null())
        .col(ColumnDef::new(Orders::Instructions).text().not_null().default(""))
        .col(
            ColumnDef::new(Orders::Status)
                .string_len(16)
                .not_null()
                .default("PENDING"),
        )
        .col(ColumnDef::new(Orders::Price).big_integer().not_null().default(0))
        .col(ColumnDef::new(Orders::PaymentProof).text())
        .col(
            ColumnDef::new(Orders::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Orders::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_orders_user_id")
                .from(Orders::Table, Orders::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    UserId,
    StudentName,
    StudentId,
    University,
    Program,
    Semester,
    TaskLink,
    SsoUsername,
    SsoPassword,
    CourseName,
    Title,
    Instructions,
    Status,
    Price,
    PaymentProof,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
