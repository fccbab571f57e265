//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// A small password generator written in Rust.

pub mod charclass;
pub mod commands;
pub mod configtool;
pub mod error;
pub mod passgen;
pub mod policy;
pub mod setclip;
pub mod shell;

pub use charclass::CharacterClass;
pub use error::PolicyError;
pub use passgen::{GenerationConfig, IndexSource};
pub use policy::PolicyEngine;
