mod bounds;
mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use bounds::Bounds;
pub use coordinates::Coordinates;
pub use linestring::LineStringGeometry;
pub use multi_linestring::MultiLineStringGeometry;
pub use multi_point::MultiPointGeometry;
pub use multi_polygon::MultiPolygonGeometry;
pub use point::PointGeometry;
pub use polygon::PolygonGeometry;
pub use ring::RingGeometry;
pub use traits::{CompositeGeometryTrait, GeometryTrait, SingleGeometryTrait};
