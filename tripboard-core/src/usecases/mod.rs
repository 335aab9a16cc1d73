mod bookmarks;
mod places;
mod resolve_location;
mod travel;

pub use self::{bookmarks::*, places::*, resolve_location::*, travel::*};

mod prelude {
    pub use crate::{error::Error, gateways::TravelGateway, render::Place, state::*};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use tripboard_boundary::Coordinate;
}
