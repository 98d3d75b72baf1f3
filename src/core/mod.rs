pub mod contact;
pub mod data;
pub mod filter;
pub mod gallery;
pub mod nav;
pub mod theme;
