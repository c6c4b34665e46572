//! 端到端场景：选中物体 → set_gravity → 检查关键帧与位置

use glam::Vec3;
use gravity_drop::animation::{Easing, Interpolation};
use gravity_drop::host::{MemoryScene, ObjectAccessor};
use gravity_drop::{
    set_gravity_with_config, Axis, DropConfig, DropError, DropOutcome, DropSession, FallRequest,
};

fn falling_cube(scene: &mut MemoryScene, z: f32) -> gravity_drop::ObjectId {
    let id = scene.add_mesh("Cube", Vec3::new(0.0, 0.0, z), Vec3::splat(0.5));
    scene.select(id);
    id
}

#[test]
fn bouncy_drop_from_five_units() {
    let mut scene = MemoryScene::new();
    let cube = falling_cube(&mut scene, 5.0);

    let request = FallRequest {
        bouncy: true,
        ..FallRequest::default()
    };
    set_gravity_with_config(&mut scene, &mut DropSession::new(), &request, &DropConfig::default())
        .unwrap();

    let z = scene.curve(cube, Axis::Z).unwrap();
    assert_eq!(z.len(), 2);

    let start = z.get(0).unwrap();
    assert_eq!(start.value, 5.0);

    let landing = z.get(24).unwrap();
    assert_eq!(landing.value, 0.0);
    assert_eq!(landing.interpolation, Interpolation::Bounce);
    assert_eq!(landing.easing, Easing::EaseOut);

    // 曲线在落地前经过中间高度
    let mid = z.evaluate(12.0).unwrap();
    assert!(mid > 0.0 && mid < 5.0, "mid = {mid}");
}

#[test]
fn soft_drop_halves_landing_frame() {
    let mut scene = MemoryScene::new();
    let cube = falling_cube(&mut scene, 5.0);

    let request = FallRequest {
        bouncy: false,
        ..FallRequest::default()
    };
    set_gravity_with_config(&mut scene, &mut DropSession::new(), &request, &DropConfig::default())
        .unwrap();

    let z = scene.curve(cube, Axis::Z).unwrap();
    assert!(z.get(24).is_none());
    let landing = z.get(12).unwrap();
    assert_eq!(landing.value, 0.0);
    assert_eq!(landing.interpolation, Interpolation::Cubic);
    assert_eq!(landing.easing, Easing::EaseIn);
}

#[test]
fn collision_lands_on_obstacle_instead_of_target() {
    let mut scene = MemoryScene::new();
    // 顶面在 z=1 的障碍物
    let block = scene.add_mesh("Block", Vec3::new(0.0, 0.0, 0.5), Vec3::splat(0.5));
    let cube = falling_cube(&mut scene, 5.0);

    let request = FallRequest {
        collision_detection: true,
        target: 0.0,
        ..FallRequest::default()
    };
    let report =
        set_gravity_with_config(&mut scene, &mut DropSession::new(), &request, &DropConfig::default())
            .unwrap();

    match report.outcome(cube) {
        Some(DropOutcome::Landed {
            landing_value,
            obstacle,
            fall_frames,
            ..
        }) => {
            assert!((landing_value - 1.5).abs() < 1e-4);
            assert_eq!(*obstacle, Some(block));
            // sqrt(2 * 3.5 / 9.81) * 24 ≈ 20.27
            assert_eq!(*fall_frames, 20);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!((scene.location(cube).unwrap().z - 1.5).abs() < 1e-4);
    // 障碍物本身没有被修改
    assert!(scene.curve(block, Axis::Z).is_none());
}

#[test]
fn zero_gravity_is_rejected_without_changes() {
    let mut scene = MemoryScene::new();
    let cube = falling_cube(&mut scene, 5.0);

    let request = FallRequest {
        gravity: 0.0,
        ..FallRequest::default()
    };
    let result =
        set_gravity_with_config(&mut scene, &mut DropSession::new(), &request, &DropConfig::default());

    assert!(matches!(result, Err(DropError::Domain(_))));
    assert_eq!(scene.location(cube).unwrap(), Vec3::new(0.0, 0.0, 5.0));
    assert!(scene.curve(cube, Axis::Z).is_none());
}

#[test]
fn repeated_drops_with_particles_ignore_previous_emitters() {
    let mut scene = MemoryScene::new();
    let config = DropConfig::default();
    scene.register_prefab(&config.particle_asset_path, &config.particle_object_name, Vec3::splat(0.5));
    let cube = falling_cube(&mut scene, 5.0);

    let mut session = DropSession::new();
    let request = FallRequest {
        collision_detection: true,
        particle_effect: true,
        ..FallRequest::default()
    };
    set_gravity_with_config(&mut scene, &mut session, &request, &config).unwrap();

    // 把物体放回高处再落一次：上一次生成的发射器就在正下方，但应被忽略
    scene.set_location(cube, Vec3::new(0.0, 0.0, 5.0)).unwrap();
    let report = set_gravity_with_config(&mut scene, &mut session, &request, &config).unwrap();

    match report.outcome(cube) {
        Some(DropOutcome::Landed {
            landing_value,
            obstacle,
            emitter,
            ..
        }) => {
            assert_eq!(*landing_value, 0.0);
            assert_eq!(*obstacle, None);
            assert_eq!(emitter.as_deref(), Some("GravityDust_001"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(session.particle_counter(), 2);
}

#[test]
fn ceiling_above_does_not_stop_downward_fall() {
    let mut scene = MemoryScene::new();
    // 天花板先登记，排在候选列表前面
    scene.add_mesh("Ceiling", Vec3::new(0.0, 0.0, 10.0), Vec3::splat(0.5));
    let floor = scene.add_mesh("Floor", Vec3::new(0.0, 0.0, 0.5), Vec3::splat(0.5));
    let cube = falling_cube(&mut scene, 5.0);

    let request = FallRequest {
        collision_detection: true,
        ..FallRequest::default()
    };
    let report =
        set_gravity_with_config(&mut scene, &mut DropSession::new(), &request, &DropConfig::default())
            .unwrap();

    match report.outcome(cube) {
        Some(DropOutcome::Landed {
            landing_value,
            obstacle,
            ..
        }) => {
            assert!((landing_value - 1.5).abs() < 1e-4);
            assert_eq!(*obstacle, Some(floor));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!((scene.location(cube).unwrap().z - 1.5).abs() < 1e-4);
}

#[test]
fn tiny_drop_still_lands_one_frame_later() {
    for bouncy in [true, false] {
        let mut scene = MemoryScene::new();
        // sqrt(2 * 0.001 / 9.81) * 24 ≈ 0.34 帧
        let cube = falling_cube(&mut scene, 0.001);

        let request = FallRequest {
            bouncy,
            start_frame: 10,
            ..FallRequest::default()
        };
        let report =
            set_gravity_with_config(&mut scene, &mut DropSession::new(), &request, &DropConfig::default())
                .unwrap();

        match report.outcome(cube) {
            Some(DropOutcome::Landed {
                fall_frames,
                landing_frame,
                ..
            }) => {
                assert_eq!(*fall_frames, 0);
                assert_eq!(*landing_frame, 11);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        let z = scene.curve(cube, Axis::Z).unwrap();
        assert_eq!(z.len(), 2);
        assert_eq!(z.get(11).unwrap().value, 0.0);
    }
}
