// ── Wave lines ──────────────────────────────────────────────────────

pub const WAVE_VERTEX: &str = r#"#version 300 es

layout(location = 0) in vec3 a_pos;
layout(location = 1) in vec3 a_color;

uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_proj;

out vec3 v_color;
out float v_depth;

void main() {
    vec4 eye = u_view * u_model * vec4(a_pos, 1.0);
    v_color = a_color;
    v_depth = -eye.z;
    gl_Position = u_proj * eye;
}
"#;

// Color already carries brightness; fog pulls it toward the fog color.
pub const WAVE_FRAGMENT: &str = r#"#version 300 es
precision highp float;

in vec3 v_color;
in float v_depth;

uniform vec3 u_fog_color;
uniform vec2 u_fog_range;

out vec4 frag_color;

void main() {
    float fog = smoothstep(u_fog_range.x, u_fog_range.y, v_depth);
    frag_color = vec4(mix(v_color, u_fog_color, fog), 1.0);
}
"#;

// ── Backdrop quads ──────────────────────────────────────────────────

pub const BACKDROP_VERTEX: &str = r#"#version 300 es

layout(location = 0) in vec2 a_corner;

uniform mat4 u_view_proj;
uniform vec3 u_center;
uniform vec2 u_size;

out vec2 v_corner;

void main() {
    v_corner = a_corner;
    vec3 world = u_center + vec3(a_corner * 0.5 * u_size, 0.0);
    gl_Position = u_view_proj * vec4(world, 1.0);
}
"#;

// Soft blobs: alpha 1 at the center, 0.8 at 40% radius, 0 at the edge.
pub const BACKDROP_FRAGMENT: &str = r#"#version 300 es
precision highp float;

in vec2 v_corner;

uniform vec3 u_color;
uniform float u_opacity;
uniform int u_soft;

out vec4 frag_color;

void main() {
    float alpha = 1.0;
    if (u_soft == 1) {
        float d = length(v_corner);
        alpha = d < 0.4 ? mix(1.0, 0.8, d / 0.4) : mix(0.8, 0.0, clamp((d - 0.4) / 0.6, 0.0, 1.0));
    }
    frag_color = vec4(u_color, alpha * u_opacity);
}
"#;

// ── Liquid shapes ───────────────────────────────────────────────────

pub const MAX_GRADIENT_STOPS: usize = 8;

pub const LIQUID_VERTEX: &str = r#"#version 300 es

layout(location = 0) in vec2 a_corner;

uniform mat4 u_view_proj;
uniform vec3 u_cam_right;
uniform vec3 u_cam_up;
uniform vec3 u_center;
uniform float u_extent;

out vec2 v_corner;
out vec3 v_world;

void main() {
    v_corner = a_corner;
    v_world = u_center + (u_cam_right * a_corner.x + u_cam_up * a_corner.y) * u_extent;
    gl_Position = u_view_proj * vec4(v_world, 1.0);
}
"#;

// Sphere impostor with a time-varying wobbly silhouette. The surface normal,
// rotated by the shape's orientation, picks a point on the diagonal gradient.
pub const LIQUID_FRAGMENT: &str = r#"#version 300 es
precision highp float;

#define MAX_STOPS 8

in vec2 v_corner;
in vec3 v_world;

uniform vec4 u_orientation;
uniform float u_distort;
uniform float u_distort_speed;
uniform float u_time;
uniform float u_opacity;
uniform float u_ambient;
uniform vec3 u_spot_position;
uniform float u_spot_intensity;
uniform vec3 u_cam_position;
uniform int u_stop_count;
uniform float u_stop_offsets[MAX_STOPS];
uniform vec3 u_stop_colors[MAX_STOPS];

out vec4 frag_color;

vec3 rotate(vec4 q, vec3 v) {
    return v + 2.0 * cross(q.xyz, cross(q.xyz, v) + q.w * v);
}

vec3 gradient(float p) {
    vec3 color = u_stop_colors[0];
    for (int i = 1; i < MAX_STOPS; i++) {
        if (i >= u_stop_count) break;
        float a = u_stop_offsets[i - 1];
        float b = u_stop_offsets[i];
        if (p >= a) {
            float span = max(b - a, 1e-5);
            color = mix(u_stop_colors[i - 1], u_stop_colors[i], clamp((p - a) / span, 0.0, 1.0));
        }
    }
    return color;
}

void main() {
    float angle = atan(v_corner.y, v_corner.x);
    float t = u_time * u_distort_speed;
    float wobble = sin(angle * 3.0 + t) * 0.5 + sin(angle * 5.0 - t * 1.3) * 0.3;
    float edge = (1.0 + u_distort * 0.5 * wobble) / (1.0 + u_distort);
    float r = length(v_corner) / edge;
    if (r > 1.0) discard;

    vec3 n = vec3(v_corner / edge, sqrt(1.0 - r * r));
    vec3 local = rotate(u_orientation, n);
    vec2 uv = local.xy * 0.5 + 0.5;
    vec3 base = gradient((uv.x + 1.0 - uv.y) * 0.5);

    vec3 to_light = normalize(u_spot_position - v_world);
    vec3 to_eye = normalize(u_cam_position - v_world);
    float diffuse = max(dot(n, to_light), 0.0) * u_spot_intensity;
    float spec = pow(max(dot(reflect(-to_light, n), to_eye), 0.0), 48.0) * u_spot_intensity;
    vec3 lit = base * (0.35 * u_ambient + 0.45 * diffuse) + vec3(spec);

    frag_color = vec4(min(lit, vec3(1.0)), u_opacity);
}
"#;
