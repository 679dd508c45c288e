//! The axis cross: shaders, vertex data, attribute layout and draw plan.
//!
//! Positions and colors live in two separate, tightly packed buffers. Vertex `i` of one
//! pairs with vertex `i` of the other.

use std::ops::Range;

use crate::draw::Topology;
use crate::vertex_array::{Attribute, Components};

/// Pass-through: 2D position at z = 0, per-vertex color forwarded to the fragment stage.
pub const VERTEX_SHADER: &str = r"#version 300 es
layout(location = 0) in vec2 position;
layout(location = 1) in vec3 color;

out vec3 vertex_color;

void main() {
    gl_Position = vec4(position, 0.0, 1.0);
    vertex_color = color;
}
";

/// Writes the interpolated vertex color, opaque.
pub const FRAGMENT_SHADER: &str = r"#version 300 es
precision mediump float;

in vec3 vertex_color;

out vec4 frag_color;

void main() {
    frag_color = vec4(vertex_color, 1.0);
}
";

#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Position(pub [f32; 2]);

#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Color(pub [f32; 3]);

pub const BLUE: Color = Color([0.0, 0.0, 1.0]);
pub const RED: Color = Color([1.0, 0.0, 0.0]);

pub const VERTEX_COUNT: usize = 4;

/// Vertical segment first, then horizontal. Both span the full NDC range.
pub const POSITIONS: [Position; VERTEX_COUNT] = [
    Position([0.0, 1.0]),
    Position([0.0, -1.0]),
    Position([-1.0, 0.0]),
    Position([1.0, 0.0]),
];

pub const COLORS: [Color; VERTEX_COUNT] = [BLUE, BLUE, RED, RED];

pub const POSITION_LOCATION: u32 = 0;
pub const COLOR_LOCATION: u32 = 1;

/// Layout of the position buffer, read by attribute slot [`POSITION_LOCATION`].
#[must_use]
pub fn position_attribute() -> Attribute {
    Attribute::packed_f32(Components::Vec2)
}

/// Layout of the color buffer, read by attribute slot [`COLOR_LOCATION`].
#[must_use]
pub fn color_attribute() -> Attribute {
    Attribute::packed_f32(Components::Vec3)
}

/// One vertex buffer and the attribute slot that reads it.
#[derive(Debug, Clone, Copy)]
pub struct Stream {
    pub location: u32,
    pub attribute: Attribute,
    pub data: &'static [u8],
}

/// Every vertex buffer of the scene, in upload order. Each gets its own enabled slot.
#[must_use]
pub fn streams() -> [Stream; 2] {
    [
        Stream {
            location: POSITION_LOCATION,
            attribute: position_attribute(),
            data: bytemuck::cast_slice(&POSITIONS),
        },
        Stream {
            location: COLOR_LOCATION,
            attribute: color_attribute(),
            data: bytemuck::cast_slice(&COLORS),
        },
    ]
}

pub const TOPOLOGY: Topology = Topology::Lines;

/// One draw call per segment.
pub const SEGMENTS: [Range<usize>; 2] = [0..2, 2..4];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_hold_four_vertices_each() {
        let positions: &[u8] = bytemuck::cast_slice(&POSITIONS);
        let colors: &[u8] = bytemuck::cast_slice(&COLORS);
        assert_eq!(positions.len(), 8 * std::mem::size_of::<f32>());
        assert_eq!(colors.len(), 12 * std::mem::size_of::<f32>());

        assert_eq!(position_attribute().count_in(positions.len()), VERTEX_COUNT);
        assert_eq!(color_attribute().count_in(colors.len()), VERTEX_COUNT);
    }

    #[test]
    fn layout_uses_two_distinct_slots() {
        assert_eq!(POSITION_LOCATION, 0);
        assert_eq!(COLOR_LOCATION, 1);

        let position = position_attribute();
        assert_eq!(position.components, Components::Vec2);
        assert_eq!(position.stride_bytes(), 2 * std::mem::size_of::<f32>());
        assert_eq!(position.offset, 0);

        let color = color_attribute();
        assert_eq!(color.components, Components::Vec3);
        assert_eq!(color.stride_bytes(), 3 * std::mem::size_of::<f32>());
        assert_eq!(color.offset, 0);
    }

    #[test]
    fn streams_enable_exactly_two_slots() {
        let streams = streams();
        let locations: Vec<u32> = streams.iter().map(|s| s.location).collect();
        assert_eq!(locations, [0, 1]);

        let strides: Vec<usize> = streams.iter().map(|s| s.attribute.stride_bytes()).collect();
        assert_eq!(strides, [8, 12]);

        for stream in streams {
            assert_eq!(stream.attribute.count_in(stream.data.len()), VERTEX_COUNT);
        }
    }

    #[test]
    fn draw_plan_covers_every_vertex_once() {
        let mut covered = [0usize; VERTEX_COUNT];
        for segment in SEGMENTS.iter().cloned() {
            assert!(segment.end <= VERTEX_COUNT, "{segment:?} out of bounds");
            for vertex in segment {
                covered[vertex] += 1;
            }
        }
        assert_eq!(covered, [1; VERTEX_COUNT]);
    }

    #[test]
    fn draw_plan_makes_two_segments() {
        assert_eq!(TOPOLOGY, Topology::Lines);
        let segments: usize = SEGMENTS
            .iter()
            .map(|range| TOPOLOGY.primitives(range.len()))
            .sum();
        assert_eq!(segments, 2);
    }

    #[test]
    fn vertical_is_blue_horizontal_is_red() {
        let [top, bottom, left, right] = POSITIONS;
        assert_eq!(top.0[0], bottom.0[0]);
        assert_eq!(left.0[1], right.0[1]);
        assert_eq!(COLORS[..2], [BLUE, BLUE]);
        assert_eq!(COLORS[2..], [RED, RED]);
    }

    #[test]
    fn both_segments_cross_the_center() {
        for segment in SEGMENTS.iter().cloned() {
            let [a, b] = [POSITIONS[segment.start], POSITIONS[segment.end - 1]];
            for axis in 0..2 {
                let (lo, hi) = (a.0[axis].min(b.0[axis]), a.0[axis].max(b.0[axis]));
                assert!(lo <= 0.0 && 0.0 <= hi);
            }
        }
    }

    #[test]
    fn shaders_declare_the_attribute_locations() {
        assert!(VERTEX_SHADER.contains("layout(location = 0) in vec2 position"));
        assert!(VERTEX_SHADER.contains("layout(location = 1) in vec3 color"));
        assert!(VERTEX_SHADER.starts_with("#version 300 es"));
        assert!(FRAGMENT_SHADER.starts_with("#version 300 es"));
    }
}
