pub mod intersection;
pub mod polygon;
pub mod primitives;
pub mod snap;
pub mod types;
pub mod windowing;

pub use intersection::find_intersections;
pub use polygon::{PeakPolygon, Polygon, build_polygons};
pub use snap::nearest_sample;
pub use types::{Curve, Sample, Segment, SegmentEndpoint, SegmentId};
pub use windowing::samples_in_rtime_window;
