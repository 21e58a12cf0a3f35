//! Infrastructure 層
//!
//! Domain 層が定義するインターフェースの具体的な実装と、ワイヤーフォーマットの DTO。

pub mod dto;
pub mod registry;
