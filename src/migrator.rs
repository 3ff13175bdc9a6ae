use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_items_table::Migration),
            Box::new(m20240301_000002_create_categories_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240301_000001_create_items_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000001_create_items_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // Create items table aligned with entities::item Model.
            // submit_by_date is derived at read time and deliberately absent.
            manager
                .create_table(
                    Table::create()
                        .table(Items::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Items::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Items::Manufacturer).string().null())
                        .col(ColumnDef::new(Items::Type).string().null())
                        .col(ColumnDef::new(Items::Description).string().null())
                        .col(ColumnDef::new(Items::LeadTimeWeeks).integer().null())
                        .col(ColumnDef::new(Items::DueDate).date().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_items_due_date")
                        .table(Items::Table)
                        .col(Items::DueDate)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Items::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Items {
        Table,
        Id,
        Manufacturer,
        Type,
        Description,
        LeadTimeWeeks,
        DueDate,
    }
}

mod m20240301_000002_create_categories_table {

    use sea_orm_migration::prelude::*;

    /// Starter categories so the type select renders usable options on a
    /// fresh database.
    const SEED_CATEGORIES: [&str; 8] = [
        "Valve",
        "Pump",
        "Pipe",
        "Fitting",
        "Gasket",
        "Actuator",
        "Instrument",
        "Electrical",
    ];

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000002_create_categories_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Categories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Categories::Category)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .to_owned(),
                )
                .await?;

            let mut seed = Query::insert()
                .into_table(Categories::Table)
                .columns([Categories::Category])
                .to_owned();
            for category in SEED_CATEGORIES {
                seed.values_panic([Expr::value(category)]);
            }
            manager.exec_stmt(seed).await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Categories::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Categories {
        Table,
        Category,
    }
}
