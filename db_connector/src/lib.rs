use diesel::{r2d2::PoolError, PgConnection};

#[cfg(feature = "memory-store")]
pub mod memory;
pub mod models;
pub mod pg;
pub mod schema;
pub mod store;

pub use store::{Page, StoreError, UserStore, PAGE_SIZE};

pub type Pool = diesel::r2d2::Pool<diesel::r2d2::ConnectionManager<PgConnection>>;

/**
 * Create db connection pool
 */
pub fn get_connection_pool(url: &str, max_size: u32) -> Result<Pool, PoolError> {
    let manager = diesel::r2d2::ConnectionManager::<PgConnection>::new(url);
    Pool::builder()
        .test_on_check_out(true)
        .max_size(max_size)
        .build(manager)
}

#[cfg(test)]
pub fn test_connection_pool() -> Pool {
    dotenvy::dotenv().ok();
    let url = std::env::var("DB_URL").expect("DB_URL must be set");
    get_connection_pool(&url, 1).expect("Could not build connection pool")
}
