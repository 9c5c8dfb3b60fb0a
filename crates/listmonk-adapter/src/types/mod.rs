/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed request/response shapes, filters and validation rules
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod validation;

pub use enums::*;
pub use queries::*;
pub use requests::*;
pub use responses::*;
pub use validation::*;
