#![no_std]

pub mod storage;

pub mod escrow {
    pub mod interface;
    pub mod types;
}

pub mod registry {
    pub mod interface;
    pub mod types;
}
