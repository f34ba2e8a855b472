pub mod m3;
pub mod m4;

pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}
