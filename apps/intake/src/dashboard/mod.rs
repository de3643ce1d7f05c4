// Dashboard: newest-first listing, search, typed card actions and clear-all.

pub mod actions;
pub mod handlers;
pub mod search;
