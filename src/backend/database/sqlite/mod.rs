mod backend_impl;
pub mod schema;
mod todo_impl;
mod user_impl;

pub use backend_impl::SqliteBackend;
pub(crate) use todo_impl::SqliteTodoStore;
pub(crate) use user_impl::SqliteUserStore;
