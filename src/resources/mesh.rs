use wgpu::util::DeviceExt;

use crate::geometry::flat_normals;

/// Describes how a vertex type is laid out in a GPU buffer.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/**
 * The vertex record uploaded for scene meshes: the position from the vertex
 * buffer and the flat normal of the face it belongs to.
 */
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SolidVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl SolidVertex {
    /// Pair every position of a flat `x, y, z` buffer with its face normal.
    pub fn from_buffers(positions: &[f32], indices: &[u32]) -> Vec<SolidVertex> {
        let normals = flat_normals(positions, indices);
        positions
            .chunks_exact(3)
            .zip(normals)
            .map(|(p, normal)| SolidVertex {
                position: [p[0], p[1], p[2]],
                normal,
            })
            .collect()
    }
}

/**
 * offset: zero as we want to use the full space.
 * stride: length of a vertex
 *
 * Stride layout here: position followed by normal, both vec3.
 */
impl Vertex for SolidVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<SolidVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// GPU copy of one scene mesh.
#[derive(Debug)]
pub struct MeshBuffers {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
    pub num_vertices: usize,
}

impl MeshBuffers {
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        positions: &[f32],
        indices: &[u32],
    ) -> anyhow::Result<Self> {
        let vertices = SolidVertex::from_buffers(positions, indices);
        let num_elements = u32::try_from(indices.len()).map_err(|e| {
            anyhow::anyhow!("{} has too many indices ({}): {}", label, indices.len(), e)
        })?;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", label)),
            contents: bytemuck::cast_slice(&vertices),
            // COPY_DST so vertex edits can be written in place
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", label)),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Ok(Self {
            vertex_buffer,
            index_buffer,
            num_elements,
            num_vertices: vertices.len(),
        })
    }

    /// Overwrite the vertex buffer in place. Fails if the vertex count changed.
    pub fn refresh(
        &self,
        queue: &wgpu::Queue,
        positions: &[f32],
        indices: &[u32],
    ) -> anyhow::Result<()> {
        let vertices = SolidVertex::from_buffers(positions, indices);
        if vertices.len() != self.num_vertices {
            anyhow::bail!(
                "vertex count changed from {} to {}, buffer must be recreated",
                self.num_vertices,
                vertices.len()
            );
        }
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        Ok(())
    }
}
