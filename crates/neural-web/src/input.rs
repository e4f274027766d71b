use glam::Vec2;
use web_sys as web;

/// Client coordinates relative to an element whose top-left corner is at
/// `(left, top)`. Non-finite input yields `None`.
#[inline]
pub fn client_to_local(client_x: f64, client_y: f64, left: f64, top: f64) -> Option<Vec2> {
    let p = Vec2::new((client_x - left) as f32, (client_y - top) as f32);
    p.is_finite().then_some(p)
}

#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    client_to_local(ev.client_x() as f64, ev.client_y() as f64, rect.left(), rect.top())
}

/// First touch point, if any.
#[inline]
pub fn touch_canvas_px(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    let rect = canvas.get_bounding_client_rect();
    client_to_local(touch.client_x() as f64, touch.client_y() as f64, rect.left(), rect.top())
}
