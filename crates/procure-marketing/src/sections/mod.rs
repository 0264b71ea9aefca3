//! Landing page sections, top to bottom

mod audience;
mod hero;
mod problem;
mod regional;
mod registration;
mod roadmap;
mod solution;

pub use audience::AudienceSplit;
pub use hero::Hero;
pub use problem::Problem;
pub use regional::RegionalPilot;
pub use registration::Registration;
pub use roadmap::Roadmap;
pub use solution::Solution;
