pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod health;
pub mod logging;
pub mod middleware;
pub mod openapi;

pub mod user {
    pub mod controller;
    pub mod error;
    pub mod repository;
    pub mod usecase;
}

pub mod tournament {
    pub mod controller;
    pub mod repository;
}

pub mod registration {
    pub mod controller;
    pub mod error;
    pub mod repository;
    pub mod usecase;
}

pub mod leaderboard {
    pub mod controller;
    pub mod repository;
}

// Unit test support only
#[cfg(test)]
mod tests;
