use approx::assert_abs_diff_eq;
use dustvol_math::{Point3, Tolerance, Vec3};
use dustvol_raytrace::intersect::{intersect_cylinder, intersect_plane, intersect_plane_default};
use dustvol_raytrace::{
    min_positive_crossing, ray_endpoints, CappedCylinder, Crossing, Endpoints, Miss, Plane, Ray,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N_RAYS: usize = 2000;

fn random_vec(rng: &mut StdRng, lo: f64, hi: f64) -> Vec3 {
    Vec3::new(
        rng.gen_range(lo..hi),
        rng.gen_range(lo..hi),
        rng.gen_range(lo..hi),
    )
}

fn random_ray(rng: &mut StdRng) -> Ray {
    loop {
        let origin = Point3::from(random_vec(rng, -2.0, 2.0));
        let direction = random_vec(rng, -1.0, 1.0);
        if let Ok(ray) = Ray::new(origin, direction) {
            return ray;
        }
    }
}

fn random_volume(rng: &mut StdRng) -> CappedCylinder {
    CappedCylinder::new(rng.gen_range(0.1..2.0), rng.gen_range(0.1..2.0)).unwrap()
}

#[test]
fn plane_crossing_lies_on_plane() {
    let mut rng = StdRng::seed_from_u64(1);
    let eps = Tolerance::DEFAULT.plane_parallel;
    let mut checked = 0;

    for _ in 0..N_RAYS {
        let plane = Plane::new(random_vec(&mut rng, 0.0, 1.0), rng.gen_range(0.0..1.0));
        let ray = random_ray(&mut rng);
        let denom = plane.normal.dot(&ray.direction);
        let s = intersect_plane(&plane, &ray, eps);

        assert_eq!(s.is_nan(), denom < eps, "denom = {denom}");
        if denom < 1e-3 {
            continue;
        }
        let scale = 1.0 + plane.offset.abs() + plane.normal.norm() * ray.at(s).coords.norm();
        assert!(
            plane.residual(&ray.at(s)).abs() < 1e-12 * scale,
            "residual {} at s = {s}",
            plane.residual(&ray.at(s))
        );
        checked += 1;
    }
    assert!(checked > N_RAYS / 4);
}

#[test]
fn cylinder_roots_lie_on_cylinder() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut hits = 0;

    for _ in 0..N_RAYS {
        let radius = rng.gen_range(0.1..2.0);
        let ray = random_ray(&mut rng);
        let (plus, minus) = intersect_cylinder(radius, &ray);

        // Either both roots exist or neither does
        assert_eq!(plus.is_nan(), minus.is_nan());
        if plus.is_nan() {
            continue;
        }

        let d = &ray.direction;
        if d.x * d.x + d.y * d.y < 1e-3 {
            continue;
        }
        for s in [plus, minus] {
            let p = ray.at(s);
            let scale = 1.0 + p.x * p.x + p.y * p.y;
            assert!(
                (p.x * p.x + p.y * p.y - radius * radius).abs() < 1e-10 * scale,
                "r² mismatch at s = {s}"
            );
        }
        assert!(plus >= minus);
        hits += 1;
    }
    assert!(hits > N_RAYS / 4);
}

#[test]
fn missing_rays_give_nan_roots() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..N_RAYS {
        let radius = rng.gen_range(0.1..2.0);
        // Travels along x at a height |y| > r: never reaches the wall
        let y = radius * rng.gen_range(1.01..3.0) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let ray = Ray::from_arrays(
            [rng.gen_range(-5.0..5.0), y, rng.gen_range(-5.0..5.0)],
            [rng.gen_range(0.1..1.0), 0.0, rng.gen_range(-1.0..1.0)],
        )
        .unwrap();
        let (plus, minus) = intersect_cylinder(radius, &ray);
        assert!(plus.is_nan() && minus.is_nan());

        let volume = CappedCylinder::new(radius, 1.0).unwrap();
        let raw = ray_endpoints(&volume, &ray);
        assert!(raw[2].is_nan() && raw[3].is_nan());
        assert_eq!(min_positive_crossing(&[f64::NAN, f64::NAN, raw[2], raw[3]]), None);
    }
}

#[test]
fn out_of_bound_crossings_become_sentinel() {
    let mut rng = StdRng::seed_from_u64(4);

    for _ in 0..N_RAYS {
        let volume = random_volume(&mut rng);
        let ray = random_ray(&mut rng);
        let raw = ray_endpoints(&volume, &ray);

        let caps = [volume.top_cap(), volume.bottom_cap()];
        for (k, cap) in caps.iter().enumerate() {
            let s = intersect_plane_default(cap, &ray);
            if s > 0.0 && !volume.within_disk(&ray.at(s)) {
                assert_eq!(raw[k], -1.0);
            } else if s.is_nan() {
                assert!(raw[k].is_nan());
            } else {
                assert_eq!(raw[k], s);
            }
        }

        let (plus, minus) = intersect_cylinder(volume.radius, &ray);
        for (k, s) in [(2, minus), (3, plus)] {
            if s > 0.0 && !volume.within_height(&ray.at(s)) {
                assert_eq!(raw[k], -1.0);
            } else if s.is_nan() {
                assert!(raw[k].is_nan());
            } else {
                assert_eq!(raw[k], s);
            }
        }
    }
}

#[test]
fn valid_crossings_lie_on_the_solid_boundary() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..N_RAYS {
        let volume = random_volume(&mut rng);
        let ray = random_ray(&mut rng);
        let e = Endpoints::resolve(&volume, &ray);

        if let Some(s) = e.top.distance() {
            assert_abs_diff_eq!(ray.at(s).z, volume.half_height, epsilon = 1e-9);
            assert!(volume.within_disk(&ray.at(s)));
        }
        if let Some(s) = e.bottom.distance() {
            assert_abs_diff_eq!(ray.at(s).z, -volume.half_height, epsilon = 1e-9);
            assert!(volume.within_disk(&ray.at(s)));
        }
        for s in [e.minus.distance(), e.plus.distance()].into_iter().flatten() {
            assert!(volume.within_height(&ray.at(s)));
        }
        for s in e.valid() {
            assert!(s > 0.0);
        }
    }
}

#[test]
fn raw_order_matches_tagged_order() {
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..N_RAYS {
        let volume = random_volume(&mut rng);
        let ray = random_ray(&mut rng);
        let e = Endpoints::resolve(&volume, &ray);
        let raw = ray_endpoints(&volume, &ray);

        assert_eq!(raw.len(), 4);
        for (r, c) in raw.iter().zip(e.crossings()) {
            match c {
                Crossing::Valid(s) => assert_eq!(*r, s),
                Crossing::Invalid(Miss::NoRoot) => assert!(r.is_nan()),
                Crossing::Invalid(Miss::OutOfBounds) => assert_eq!(*r, -1.0),
                Crossing::Invalid(Miss::Behind(s)) => {
                    assert_eq!(*r, s);
                    assert!(s <= 0.0);
                }
            }
        }
        assert_eq!(e.crossings()[0], e.top);
        assert_eq!(e.crossings()[1], e.bottom);
        assert_eq!(e.crossings()[2], e.minus);
        assert_eq!(e.crossings()[3], e.plus);
    }
}

#[test]
fn sentinels_never_win_the_minimum() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..N_RAYS {
        let volume = random_volume(&mut rng);
        let ray = random_ray(&mut rng);
        let e = Endpoints::resolve(&volume, &ray);
        let raw = e.raw();

        let nearest = min_positive_crossing(&raw);
        let expected = e.valid().min_by(|a, b| a.total_cmp(b));
        assert_eq!(nearest, expected);
        if let Some(s) = nearest {
            assert!(!s.is_nan());
            assert!(s > 0.0);
            assert_ne!(s, -1.0);
        }
    }

    // Hand-mixed arrays of both sentinel forms
    for _ in 0..100 {
        let valid = rng.gen_range(0.1..10.0);
        let mut raw = [f64::NAN, -1.0, f64::NAN, -1.0];
        let slot = rng.gen_range(0..4);
        raw[slot] = valid;
        assert_eq!(min_positive_crossing(&raw), Some(valid));
        raw[slot] = if rng.gen_bool(0.5) { f64::NAN } else { -1.0 };
        assert_eq!(min_positive_crossing(&raw), None);
    }
}

#[test]
fn interval_contains_only_interior_points() {
    let mut rng = StdRng::seed_from_u64(8);
    // Slack for points computed back from the interval endpoints
    let slack = 1e-9;

    for _ in 0..N_RAYS {
        let volume = random_volume(&mut rng);
        let ray = random_ray(&mut rng);
        let Some(interval) = Endpoints::resolve(&volume, &ray).interval() else {
            continue;
        };
        assert!(interval.entry >= 0.0);
        assert!(interval.length() >= 0.0);

        // The midpoint of a proper interval is inside the solid
        if interval.length() > slack {
            let mid = ray.at(0.5 * (interval.entry + interval.exit));
            let grown =
                CappedCylinder::new(volume.radius + slack, volume.half_height + slack).unwrap();
            assert!(grown.contains(&mid), "midpoint {mid:?} outside {volume:?}");
        }
    }
}
