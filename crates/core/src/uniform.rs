//! Uniform values passed to a shader pair for one draw call.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// A single uniform value. `T` is the texture handle type of the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform<T> {
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
    /// Bound to the next free texture unit; the sampler receives the unit index.
    Texture(T),
}

impl<T> From<f32> for Uniform<T> {
    fn from(v: f32) -> Self {
        Uniform::Float(v)
    }
}

impl<T> From<i32> for Uniform<T> {
    fn from(v: i32) -> Self {
        Uniform::Int(v)
    }
}

impl<T> From<Vec2> for Uniform<T> {
    fn from(v: Vec2) -> Self {
        Uniform::Vec2(v)
    }
}

impl<T> From<Vec3> for Uniform<T> {
    fn from(v: Vec3) -> Self {
        Uniform::Vec3(v)
    }
}

impl<T> From<Vec4> for Uniform<T> {
    fn from(v: Vec4) -> Self {
        Uniform::Vec4(v)
    }
}

impl<T> From<Mat4> for Uniform<T> {
    fn from(v: Mat4) -> Self {
        Uniform::Mat4(v)
    }
}

/// Named uniform values in insertion order. Setting a name twice replaces the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Uniforms<T> {
    entries: Vec<(String, Uniform<T>)>,
}

impl<T> Default for Uniforms<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Uniforms<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Uniforms::set`].
    pub fn with(mut self, name: &str, value: impl Into<Uniform<T>>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<Uniform<T>>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name.to_owned(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Uniform<T>> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Uniform<T>)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_twice_replaces_in_place() {
        let mut uniforms: Uniforms<()> = Uniforms::new().with("time", 0.0_f32).with("scale", 2.0_f32);
        uniforms.set("time", 1.5_f32);
        let names: Vec<&str> = uniforms.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["time", "scale"]);
        assert_eq!(uniforms.get("time"), Some(&Uniform::Float(1.5)));
    }

    #[test]
    fn glam_types_convert_to_matching_variants() {
        let uniforms: Uniforms<u8> = Uniforms::new()
            .with("offset", Vec2::new(1.0, 2.0))
            .with("light", Vec3::ONE)
            .with("tint", Vec4::ZERO)
            .with("model", Mat4::IDENTITY)
            .with("count", 3_i32);
        assert!(matches!(uniforms.get("offset"), Some(Uniform::Vec2(_))));
        assert!(matches!(uniforms.get("light"), Some(Uniform::Vec3(_))));
        assert!(matches!(uniforms.get("tint"), Some(Uniform::Vec4(_))));
        assert!(matches!(uniforms.get("model"), Some(Uniform::Mat4(_))));
        assert_eq!(uniforms.get("count"), Some(&Uniform::Int(3)));
        assert_eq!(uniforms.len(), 5);
    }

    #[test]
    fn texture_uniform_carries_handle() {
        let mut uniforms = Uniforms::new();
        uniforms.set("sampler", Uniform::Texture(42_u32));
        assert_eq!(uniforms.get("sampler"), Some(&Uniform::Texture(42)));
        assert!(uniforms.get("missing").is_none());
    }
}
