pub mod mongo_service;
pub mod supabase_service;

pub use mongo_service::MongoService;
pub use supabase_service::SupabaseService;
