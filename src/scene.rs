use three_d::*;

use crate::animation::RotationState;
use crate::config::SceneConfig;
use crate::pillar::InvalidEdgeError;
use crate::tesseract::{self, INNER_EDGES, OUTER_EDGES};

/// The two counter-rotating cube groups. Each group is a single instanced
/// cylinder mesh (12 pillars), so a frame costs two draws.
pub struct TesseractScene {
    outer: Gm<InstancedMesh, PhysicalMaterial>,
    inner: Gm<InstancedMesh, PhysicalMaterial>,
}

impl TesseractScene {
    pub fn new(context: &Context, config: &SceneConfig) -> Result<Self, InvalidEdgeError> {
        let vertices = tesseract::tesseract_vertices(config.half_extent);
        let unit_pillar = unit_pillar_mesh(config.subdivisions);

        let outer = cube_group(
            context,
            &unit_pillar,
            instance_matrices(&vertices, &OUTER_EDGES, config.outer_radius)?,
            config.outer_color,
        );
        let inner = cube_group(
            context,
            &unit_pillar,
            instance_matrices(&vertices, &INNER_EDGES, config.inner_radius)?,
            config.inner_color,
        );

        Ok(Self { outer, inner })
    }

    /// Spins both groups about the shared y axis to the given angles.
    pub fn apply_rotation(&mut self, state: &RotationState) {
        self.outer.set_transformation(Mat4::from_angle_y(radians(state.outer_angle)));
        self.inner.set_transformation(Mat4::from_angle_y(radians(state.inner_angle)));
    }

    pub fn objects(&self) -> impl Iterator<Item = &dyn Object> {
        self.outer.into_iter().chain(&self.inner)
    }
}

/// Lights matching the stock scene: a white ambient wash plus cyan and
/// magenta directionals shining toward the origin from opposite corners.
pub struct Lighting {
    ambient: AmbientLight,
    key: DirectionalLight,
    fill: DirectionalLight,
}

impl Lighting {
    pub fn new(context: &Context) -> Self {
        Self {
            ambient: AmbientLight::new(context, 0.5, Srgba::WHITE),
            key: DirectionalLight::new(
                context,
                0.8,
                Srgba::new_opaque(0x00, 0xff, 0xff),
                &vec3(-5.0, -10.0, -5.0),
            ),
            fill: DirectionalLight::new(
                context,
                0.6,
                Srgba::new_opaque(0xff, 0x00, 0xff),
                &vec3(5.0, 5.0, 5.0),
            ),
        }
    }

    pub fn lights(&self) -> [&dyn Light; 3] {
        [&self.ambient, &self.key, &self.fill]
    }
}

fn cube_group(
    context: &Context,
    unit_pillar: &CpuMesh,
    transformations: Vec<Mat4>,
    color: [u8; 3],
) -> Gm<InstancedMesh, PhysicalMaterial> {
    let instances = Instances {
        transformations,
        ..Default::default()
    };
    Gm::new(
        InstancedMesh::new(context, &instances, unit_pillar),
        PhysicalMaterial::new_opaque(
            context,
            &CpuMaterial {
                albedo: Srgba::new_opaque(color[0], color[1], color[2]),
                metallic: 0.3,
                roughness: 0.4,
                ..Default::default()
            },
        ),
    )
}

/// One model matrix per edge, ready to instance the unit pillar with.
fn instance_matrices(
    vertices: &[Vec3; 16],
    edges: &[[usize; 2]; 12],
    radius: f32,
) -> Result<Vec<Mat4>, InvalidEdgeError> {
    Ok(tesseract::pillar_transforms(vertices, edges, radius)?
        .iter()
        .map(|pillar| pillar.matrix())
        .collect())
}

/// `CpuMesh::cylinder` spans the x axis from 0 to 1; re-model it onto the
/// pillar reference axis, centered at the origin, so that the pillar
/// matrices can scale it by (radius, length, radius).
fn unit_pillar_mesh(subdivisions: u32) -> CpuMesh {
    let mut mesh = CpuMesh::cylinder(subdivisions);
    mesh.transform(&(Mat4::from_translation(vec3(0.0, -0.5, 0.0)) * Mat4::from_angle_z(degrees(90.0))))
        .expect("cylinder re-model transform is invertible");
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tesseract::tesseract_vertices;

    const EPS: f32 = 1e-5;

    #[test]
    fn instance_matrices_map_unit_endpoints_onto_vertices() {
        let vertices = tesseract_vertices(2.0);
        for (edges, radius) in [(&OUTER_EDGES, 0.08), (&INNER_EDGES, 0.06)] {
            let matrices = instance_matrices(&vertices, edges, radius).unwrap();
            assert_eq!(matrices.len(), 12);
            for (m, &[a, b]) in matrices.iter().zip(edges.iter()) {
                let bottom = (m * vec4(0.0, -0.5, 0.0, 1.0)).truncate();
                let top = (m * vec4(0.0, 0.5, 0.0, 1.0)).truncate();
                assert!((bottom - vertices[a]).magnitude() < EPS);
                assert!((top - vertices[b]).magnitude() < EPS);
            }
        }
    }

    #[test]
    fn unit_pillar_mesh_is_centered_on_the_reference_axis() {
        let mesh = unit_pillar_mesh(16);
        let positions = mesh.positions.to_f32();
        assert!(!positions.is_empty());
        for p in positions {
            assert!(p.y >= -0.5 - EPS && p.y <= 0.5 + EPS);
            let radial = (p.x * p.x + p.z * p.z).sqrt();
            assert!(radial <= 1.0 + EPS);
        }
    }
}
