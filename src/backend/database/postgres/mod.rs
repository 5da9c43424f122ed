mod backend_impl;
pub mod schema;
mod todo_impl;
mod user_impl;

pub use backend_impl::PostgresBackend;
pub(crate) use todo_impl::PostgresTodoStore;
pub(crate) use user_impl::PostgresUserStore;
