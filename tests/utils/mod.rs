#![allow(dead_code)]

pub mod factories;
pub mod fakes;

pub use factories::{CampaignFactory, CreatorFactory};
pub use fakes::{
    FailingCreatorRepository, InMemoryBrandRepository, InMemoryCampaignRepository,
    InMemoryCreatorRepository,
};
