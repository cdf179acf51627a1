#![allow(unused)]

use std::time::{Duration, Instant};

use failure::Error;
use log::{debug, info, warn};
use rand::Rng;
use vek::Vec2;

use fovcone::config::VisionConfig;
use fovcone::spatial::{Collider, ColliderShape, StaticWorld, LAYER_ENV};
use fovcone::target::TargetRegistry;
use fovcone::tick::VisionTickSystem;
use fovcone::vision::geometry::ObserverPose;
use fovcone::vision::instance::VisionInstance;
use fovcone::vision::output::VisionMeshData;

const TPS: u64 = 10;
const DEMO_TICKS: u32 = 50;

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

fn build_demo_world() -> StaticWorld {
    let mut world = StaticWorld::new();
    let mut rng = rand::rng();

    // 散一些圓形遮擋物
    for i in 0..8u64 {
        world.add_collider(Collider {
            id: 100 + i,
            position: Vec2::new(rng.random_range(-8.0..8.0), rng.random_range(-8.0..8.0)),
            shape: ColliderShape::Circle { radius: 0.6 },
            layer: LAYER_ENV,
        });
    }

    // 一面牆
    world.add_collider(Collider {
        id: 200,
        position: Vec2::new(4.0, -2.0),
        shape: ColliderShape::Segment {
            a: Vec2::new(0.0, -2.0),
            b: Vec2::new(0.0, 2.0),
        },
        layer: LAYER_ENV,
    });

    world
}

fn main() -> Result<(), Error> {
    setup_logger()?;

    let config = VisionConfig::from_file("vision.toml").unwrap_or_else(|e| {
        warn!("讀取 vision.toml 失敗（{}），改用預設配置", e);
        VisionConfig::default()
    });
    config.validate();

    let world = build_demo_world();
    info!("示範世界建好：{} 個環境碰撞體", world.collider_count());

    let mut registry = TargetRegistry::new();
    registry.insert(1, Vec2::new(5.0, 0.0), ColliderShape::Circle { radius: 0.5 });
    registry.insert(
        2,
        Vec2::new(-3.0, 1.0),
        ColliderShape::Box {
            width: 1.0,
            height: 1.0,
        },
    );
    registry.insert(3, Vec2::new(0.0, 6.0), ColliderShape::Circle { radius: 0.4 });

    let mut instances = vec![
        VisionInstance::new(config.clone(), ObserverPose::new(Vec2::zero(), 0.0)),
        VisionInstance::new(
            config.clone(),
            ObserverPose::new(Vec2::new(2.0, 2.0), std::f32::consts::FRAC_PI_2),
        ),
    ];

    let mut tick_system = VisionTickSystem::new();
    let tick_duration = Duration::from_secs_f64(1.0 / TPS as f64);

    for tick in 0..DEMO_TICKS {
        let start = Instant::now();

        // 讓觀察者緩慢旋轉，展示逐 tick 重算
        for instance in instances.iter_mut() {
            instance.pose.facing += 0.05;
        }

        tick_system.run(&mut instances, &world, &mut registry);

        if tick % 10 == 0 {
            info!("tick {}: 可見目標 {:?}", tick, registry.visible_targets());
        }

        let elapsed = start.elapsed();
        if elapsed < tick_duration {
            spin_sleep::sleep(tick_duration - elapsed);
        }
    }

    let mesh = VisionMeshData::from_instance(&instances[0]);
    info!(
        "觀察者 0 的網格：{} 頂點 / {} 三角形",
        mesh.vertices.len(),
        mesh.triangle_count()
    );
    debug!("mesh json: {}", serde_json::to_string(&mesh)?);

    Ok(())
}
