pub mod upsert_role;
