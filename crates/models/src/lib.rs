pub mod errors;
pub mod db;
pub mod content;

#[cfg(test)]
mod tests;
