pub mod search;
pub mod user_agent;

#[cfg(test)]
mod tests;
