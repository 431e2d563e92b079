//! Scene geometry: the sphere mesh, the spring coil and the free-surface
//! grid. Pure presentation data consumed by the render pipeline.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Mesh vertex: position and normal
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Triangle mesh
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Generate a UV sphere with the heave (Z) axis as the polar axis
pub fn uv_sphere(radius: f32, stacks: u32, slices: u32) -> Mesh {
    assert!(stacks >= 2 && slices >= 3);

    let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
    for stack in 0..=stacks {
        let theta = std::f32::consts::PI * stack as f32 / stacks as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        for slice in 0..=slices {
            let phi = 2.0 * std::f32::consts::PI * slice as f32 / slices as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            let normal = Vec3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta);
            vertices.push(Vertex {
                position: (normal * radius).to_array(),
                normal: normal.to_array(),
            });
        }
    }

    let ring = slices + 1;
    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
    for stack in 0..stacks {
        for slice in 0..slices {
            let i0 = stack * ring + slice;
            let i1 = i0 + 1;
            let i2 = i0 + ring;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    Mesh { vertices, indices }
}

/// Polyline of a helical spring between two points.
///
/// The coil amplitude tapers to zero at both ends so the line meets the
/// attachment points exactly.
pub fn spring_coil(
    start: Vec3,
    end: Vec3,
    coils: u32,
    coil_radius: f32,
    segments_per_coil: u32,
) -> Vec<Vec3> {
    let axis = end - start;
    let length = axis.length();
    if length <= f32::EPSILON {
        return vec![start, end];
    }
    let dir = axis / length;

    // Orthonormal frame around the spring axis
    let reference = if dir.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    let u = dir.cross(reference).normalize();
    let v = dir.cross(u);

    let segments = coils * segments_per_coil;
    let mut points = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let angle = t * coils as f32 * 2.0 * std::f32::consts::PI;
        let amplitude = coil_radius * (std::f32::consts::PI * t).sin();
        let offset = u * (angle.cos() * amplitude) + v * (angle.sin() * amplitude);
        points.push(start + axis * t + offset);
    }
    points
}

/// Line-list vertices of a square grid in the z = 0 plane
pub fn surface_grid(half_extent: f32, lines_per_side: u32) -> Vec<Vec3> {
    let n = lines_per_side.max(2);
    let mut points = Vec::with_capacity((n as usize + 1) * 4);
    for i in 0..=n {
        let a = -half_extent + 2.0 * half_extent * i as f32 / n as f32;
        points.push(Vec3::new(a, -half_extent, 0.0));
        points.push(Vec3::new(a, half_extent, 0.0));
        points.push(Vec3::new(-half_extent, a, 0.0));
        points.push(Vec3::new(half_extent, a, 0.0));
    }
    points
}
