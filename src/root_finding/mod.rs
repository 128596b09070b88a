// common helpers 
pub mod algorithms; 
pub mod report; 
pub mod errors; 
pub mod incremental; 
pub(crate) mod config;
pub(crate) mod eval; 
pub(crate) mod signs; 
pub(crate) mod tolerances; 

// algorithms 
pub mod bisection;
pub mod regula_falsi;
pub mod secant;
pub mod modified_secant; 
pub mod newton;

pub use bisection::{bisection, BisectionCfg, BisectionError}; 
pub use regula_falsi::{regula_falsi, RegulaFalsiCfg, RegulaFalsiError, RegulaFalsiVariant}; 
pub use secant::{secant, SecantCfg, SecantError}; 
pub use modified_secant::{modified_secant, ModifiedSecantCfg, ModifiedSecantError}; 
pub use newton::{newton, NewtonCfg, NewtonError}; 
pub use incremental::{incremental_search, Bracket, IncrementalSearchError}; 
