mod errors;
mod monetary;
#[cfg(test)]
mod tests;

pub use monetary::Monetary;
