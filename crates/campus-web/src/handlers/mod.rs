pub mod pages;
pub mod university;

use crate::error::Error;

pub(super) fn store_error<E>(e: E) -> Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  Error::Store(Box::new(e))
}
