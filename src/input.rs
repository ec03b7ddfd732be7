use web_sys as web;

/// Current viewport size in CSS pixels (`innerWidth`, `innerHeight`).
#[inline]
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Client coordinates of the first active touch.
#[inline]
pub fn first_touch_client(ev: &web::TouchEvent) -> Option<(f32, f32)> {
    let touch = ev.touches().get(0)?;
    Some((touch.client_x() as f32, touch.client_y() as f32))
}

/// Touch pointers also raise touch events; parallax for those comes from `touchmove`.
#[inline]
pub fn is_touch_pointer(ev: &web::PointerEvent) -> bool {
    ev.pointer_type() == "touch"
}
