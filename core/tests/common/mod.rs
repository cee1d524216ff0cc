//! Shared fixture: a small scene node class.

#![allow(dead_code)]

use bindery_core::{Class, Object};
use bindery_types::StringName;
use bindery_values::{Face3, Vector3};

#[derive(Debug, Default)]
pub struct Node3D {
    pub position: Vector3,
    pub layers: u32,
    pub faces: Vec<Face3>,
    pub calls: usize,
    pub placeholder: bool,
}

impl Object for Node3D {
    fn class_name(&self) -> StringName {
        StringName::from(Self::CLASS_NAME)
    }

    fn is_extension_placeholder(&self) -> bool {
        self.placeholder
    }
}

impl Class for Node3D {
    const CLASS_NAME: &'static str = "Node3D";
}

impl Node3D {
    pub fn move_by(&mut self, x: f64, y: f64, z: f64) -> Vector3 {
        self.calls += 1;
        self.position = self.position + Vector3::new(x as f32, y as f32, z as f32);
        self.position
    }

    pub fn set_layer(&mut self, layer: i32, enabled: bool) {
        self.calls += 1;
        if enabled {
            self.layers |= 1 << layer;
        } else {
            self.layers &= !(1 << layer);
        }
    }

    pub fn layers(&self) -> u32 {
        self.layers
    }

    pub fn set_faces(&mut self, faces: Vec<Face3>) {
        self.calls += 1;
        self.faces = faces;
    }

    pub fn faces(&self) -> Vec<Face3> {
        self.faces.clone()
    }

    pub fn describe(&self, prefix: String) -> String {
        format!("{prefix}{}", self.position)
    }
}

/// A class that is never the receiver of `Node3D` binds.
#[derive(Debug, Default)]
pub struct Light;

impl Object for Light {
    fn class_name(&self) -> StringName {
        StringName::from(Self::CLASS_NAME)
    }
}

impl Class for Light {
    const CLASS_NAME: &'static str = "Light";
}
