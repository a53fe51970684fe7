use bevy::mesh::MeshVertexBufferLayoutRef;
use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::render_resource::{
    AsBindGroup, Face, RenderPipelineDescriptor, SpecializedMeshPipelineError,
};
use bevy::shader::ShaderRef;

/// Additive halo drawn from the inside of a slightly larger sphere around
/// the globe.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct AtmosphereMaterial {
    /// Alpha scales the glow intensity.
    #[uniform(0)]
    pub color: LinearRgba,
}

impl Material for AtmosphereMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/atmosphere.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }

    fn specialize(
        _pipeline: &MaterialPipeline,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        draw_back_faces_only(descriptor);
        Ok(())
    }
}

/// Only the far side of the shell is drawn, so the glow sits around the
/// globe instead of over it.
fn draw_back_faces_only(descriptor: &mut RenderPipelineDescriptor) {
    descriptor.primitive.cull_mode = Some(Face::Front);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halo_culls_front_faces() {
        let mut descriptor = RenderPipelineDescriptor::default();
        draw_back_faces_only(&mut descriptor);
        assert_eq!(descriptor.primitive.cull_mode, Some(Face::Front));
    }
}
