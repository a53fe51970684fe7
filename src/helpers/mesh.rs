use bevy::asset::RenderAssetUsages;
use bevy::math::primitives::Cuboid;
use bevy::math::Vec3;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::Mesh;
use geoglobe::marker::MarkerBox;

/// Box mesh for a marker, shifted so it spans `z ∈ [0, depth]`. Scaling the
/// entity along z then shrinks the bar towards the globe surface.
pub fn marker_mesh(shape: &MarkerBox) -> Mesh {
    Mesh::from(Cuboid::from_size(shape.size)).translated_by(shape.center())
}

pub fn star_mesh(stars: &[Vec3]) -> Mesh {
    let positions: Vec<[f32; 3]> = stars.iter().map(|star| star.to_array()).collect();
    // Stars face the camera, which looks down -Z
    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];

    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::mesh::VertexAttributeValues;

    fn positions(mesh: &Mesh) -> Vec<[f32; 3]> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(values)) => values.clone(),
            other => panic!("unexpected position attribute: {other:?}"),
        }
    }

    #[test]
    fn test_marker_mesh_sits_on_surface() {
        let shape = MarkerBox::new(Vec3::new(0.2, 0.3, 0.8));
        let positions = positions(&marker_mesh(&shape));

        let min_z = positions.iter().map(|p| p[2]).fold(f32::INFINITY, f32::min);
        let max_z = positions.iter().map(|p| p[2]).fold(f32::NEG_INFINITY, f32::max);
        let max_x = positions.iter().map(|p| p[0].abs()).fold(0.0, f32::max);
        let max_y = positions.iter().map(|p| p[1].abs()).fold(0.0, f32::max);

        assert!(min_z.abs() < 1e-6);
        assert!((max_z - 0.8).abs() < 1e-6);
        assert!((max_x - 0.1).abs() < 1e-6);
        assert!((max_y - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_star_mesh_has_one_point_per_star() {
        let stars = [Vec3::new(1.0, 2.0, -3.0), Vec3::new(-4.0, 5.0, -6.0)];
        let mesh = star_mesh(&stars);

        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::PointList);
        assert_eq!(positions(&mesh), vec![[1.0, 2.0, -3.0], [-4.0, 5.0, -6.0]]);
    }
}
