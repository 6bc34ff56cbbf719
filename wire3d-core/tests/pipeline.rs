//! End-to-end checks of the transform -> project -> rasterize pipeline

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::{Duration, Instant};

use wire3d_core::animation::VERTEX_GLYPH;
use wire3d_core::math::apply_matrix;
use wire3d_core::{
    apply_matrix_to_mesh, Animation, AnimationConfig, AnimationState, Axis, CharBuffer, KeyInbox,
    LinePoints, Mesh, Projector, ScreenPoint, Spin, StopToken, Transform, Vec3,
};

fn project_all(mesh: &Mesh, projector: &Projector, offset: ScreenPoint) -> Vec<ScreenPoint> {
    mesh.vertices()
        .iter()
        .map(|v| projector.project(v, offset).unwrap())
        .collect()
}

#[test]
fn scaled_cube_projects_to_connected_wireframe() {
    let cube = apply_matrix_to_mesh(Mesh::cube(), &Transform::scale_matrix(15.0, 15.0, 15.0));
    let points = project_all(&cube, &Projector::new(160.0), ScreenPoint::new(40, 20));

    let distinct: HashSet<_> = points.iter().collect();
    assert_eq!(distinct.len(), 8);

    // Union of all rasterized edges must form one connected set
    let mut cells: HashSet<(i32, i32)> = HashSet::new();
    for &[a, b] in cube.edges() {
        cells.extend(LinePoints::new(points[a], points[b]).map(|p| (p.x, p.y)));
    }

    let start = (points[0].x, points[0].y);
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some((x, y)) = queue.pop_front() {
        for dx in -1..=1 {
            for dy in -1..=1 {
                let next = (x + dx, y + dy);
                if cells.contains(&next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    assert_eq!(seen.len(), cells.len());
    for p in &points {
        assert!(seen.contains(&(p.x, p.y)));
    }

    // Every vertex is an endpoint of exactly three edges
    let mut degree: HashMap<usize, usize> = HashMap::new();
    for &[a, b] in cube.edges() {
        *degree.entry(a).or_default() += 1;
        *degree.entry(b).or_default() += 1;
    }
    assert!(degree.values().all(|&d| d == 3));
}

#[test]
fn rotation_round_trip_over_many_ticks() {
    let spin = Spin::new(Axis::Y, 7.5);
    let mut mesh = Mesh::tetrahedron();
    for _ in 0..48 {
        mesh = apply_matrix_to_mesh(mesh, &spin.matrix());
    }
    // 48 * 7.5 = 360 degrees
    for (v, original) in mesh.vertices().iter().zip(Mesh::tetrahedron().vertices()) {
        assert!((v - original).norm() < 1e-3, "{:?} vs {:?}", v, original);
    }
}

#[test]
fn shear_then_identity_scale_keeps_points() {
    let shear = Transform::shear_matrix(0.5, 0.25);
    let v = Vec3::new(2.0, 4.0, 8.0);
    let sheared = apply_matrix(v, &shear);
    // x contributes through row 0: (1, 0.5, 0.25)
    assert_eq!(sheared, Vec3::new(2.0, 5.0, 8.5));
    assert_eq!(
        apply_matrix(sheared, &Transform::scale_matrix(1.0, 1.0, 1.0)),
        sheared
    );
}

#[test]
fn animation_runs_exactly_duration_over_tick() {
    let config = AnimationConfig {
        tick: Duration::from_millis(2),
        duration: Duration::from_millis(30),
        ..AnimationConfig::default()
    };
    let cube = apply_matrix_to_mesh(Mesh::cube(), &Transform::scale_matrix(15.0, 15.0, 15.0));
    let mut animation = Animation::new(vec![cube, Mesh::tetrahedron()], config).unwrap();
    let mut buffer = CharBuffer::new(80, 40);

    let started = Instant::now();
    let ticks = animation
        .run(&mut buffer, &StopToken::new(), &KeyInbox::new())
        .unwrap();

    assert_eq!(ticks, 15);
    assert_eq!(buffer.presented(), 15);
    assert_eq!(animation.state(), AnimationState::Stopped);
    assert!(animation.meshes().is_empty());
    // Paced by the tick delay (last tick does not sleep)
    assert!(started.elapsed() >= Duration::from_millis(28));
}

#[test]
fn animation_stops_when_cancelled_from_another_thread() {
    let config = AnimationConfig {
        tick: Duration::from_millis(5),
        duration: Duration::from_secs(60),
        ..AnimationConfig::default()
    };
    let stop = StopToken::new();
    let inbox = KeyInbox::new();

    let handle = {
        let stop = stop.clone();
        let inbox = inbox.clone();
        std::thread::spawn(move || {
            let mut animation = Animation::new(vec![Mesh::cube()], config).unwrap();
            let mut buffer = CharBuffer::new(40, 20);
            animation.run(&mut buffer, &stop, &inbox).unwrap()
        })
    };

    std::thread::sleep(Duration::from_millis(30));
    inbox.post('q');
    stop.cancel();
    let ticks = handle.join().unwrap();

    assert!(ticks > 0);
    assert!(ticks < 12_000);
}

#[test]
fn frame_shows_vertex_marks_for_every_cube_corner() {
    let cube = apply_matrix_to_mesh(Mesh::cube(), &Transform::scale_matrix(15.0, 15.0, 15.0));
    let config = AnimationConfig {
        spins: vec![],
        ..AnimationConfig::default()
    };
    let animation = Animation::new(vec![cube], config).unwrap();
    let mut buffer = CharBuffer::new(80, 40);
    animation.compose(&mut buffer);

    let marks = buffer
        .occupied()
        .into_iter()
        .filter(|&(x, y)| buffer.get(x, y).map(|c| c.glyph) == Some(VERTEX_GLYPH))
        .count();
    assert_eq!(marks, 8);
    assert_eq!(buffer.rejected(), 0);
}
