//! Static model registry consumed by auto-migration.

/// A registered model: its logical name and the DDL that materializes it.
pub struct ModelDef {
    pub name: &'static str,
    pub ddl: &'static str,
}

/// Registered models, migrated in declaration order.
///
/// The `users` email column is deliberately not UNIQUE: seeding appends
/// fresh rows on every run.
pub const MODELS: &[ModelDef] = &[ModelDef {
    name: "users",
    ddl: "CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        password TEXT NOT NULL,
        remember_token TEXT NOT NULL DEFAULT '',
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL,
        deleted_at TIMESTAMPTZ
    )",
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_model_is_registered_first() {
        assert!(!MODELS.is_empty());
        assert_eq!(MODELS[0].name, "users");
    }

    #[test]
    fn ddl_is_rerunnable() {
        for model in MODELS {
            assert!(model.ddl.contains("CREATE TABLE IF NOT EXISTS"));
        }
    }
}
