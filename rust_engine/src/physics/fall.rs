//! 自由落体时长

use crate::{DropError, Result};

/// 从 `h0` 落到 `hf` 所需的秒数
///
/// 匀加速自由落体：`t = sqrt(|2·(h0 − hf)| / |g|)`。
/// 初速度不参与计算（保留参数，见 `FallRequest::initial_velocity`）。
pub fn fall_seconds(h0: f32, hf: f32, gravity: f32) -> Result<f32> {
    if !gravity.is_finite() || gravity == 0.0 {
        return Err(DropError::Domain(format!(
            "gravity must be a non-zero finite value, got {gravity}"
        )));
    }
    if !h0.is_finite() || !hf.is_finite() {
        return Err(DropError::Domain(format!(
            "positions must be finite, got {h0} -> {hf}"
        )));
    }

    Ok(((2.0 * (h0 - hf)).abs() / gravity.abs()).sqrt())
}

/// 从 `h0` 落到 `hf` 所需的帧数（秒数 × 帧率后截断）
pub fn fall_frames(h0: f32, hf: f32, gravity: f32, frame_rate: f32) -> Result<u32> {
    if !frame_rate.is_finite() || frame_rate <= 0.0 {
        return Err(DropError::Domain(format!(
            "frame rate must be positive, got {frame_rate}"
        )));
    }

    let seconds = fall_seconds(h0, hf, gravity)?;
    // as 转换在 f32 超出 u32 范围时饱和
    Ok((seconds * frame_rate) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_units_at_earth_gravity() {
        let seconds = fall_seconds(5.0, 0.0, -9.81).unwrap();
        assert!((seconds - 1.0096).abs() < 1e-3);
        assert_eq!(fall_frames(5.0, 0.0, -9.81, 24.0).unwrap(), 24);
    }

    #[test]
    fn test_direction_does_not_matter() {
        let down = fall_frames(5.0, 0.0, -9.81, 24.0).unwrap();
        let up = fall_frames(0.0, 5.0, 9.81, 24.0).unwrap();
        assert_eq!(down, up);
    }

    #[test]
    fn test_zero_gravity_is_domain_error() {
        assert!(matches!(fall_seconds(5.0, 0.0, 0.0), Err(DropError::Domain(_))));
        assert!(matches!(fall_frames(5.0, 0.0, f32::NAN, 24.0), Err(DropError::Domain(_))));
    }

    #[test]
    fn test_invalid_frame_rate() {
        assert!(matches!(fall_frames(5.0, 0.0, -9.81, 0.0), Err(DropError::Domain(_))));
    }

    #[test]
    fn test_same_height_is_zero() {
        assert_eq!(fall_frames(3.0, 3.0, -9.81, 24.0).unwrap(), 0);
    }

    #[test]
    fn test_monotonic_in_height() {
        let mut last = 0;
        for i in 0..200 {
            let h = i as f32 * 0.25;
            let frames = fall_frames(h, 0.0, -9.81, 24.0).unwrap();
            assert!(frames >= last, "h = {h}: {frames} < {last}");
            last = frames;
        }
    }
}
