mod relative_coordinates;

pub use relative_coordinates::RelativeCoordinates;
