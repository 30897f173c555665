use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Middleware для логирования HTTP запросов
///
/// Пишет одно событие `http_access` на запрос:
/// - Статус код
/// - Метод и путь
/// - Длительность (ms)
/// - Размер ответа (с разделителями тысяч)
///
/// Ответы 5xx пишутся на уровне warn.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                target: "http_access",
                "{} {} {} | {}ms | body error: {}",
                parts.status.as_u16(),
                method,
                uri.path(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let elapsed = start.elapsed().as_millis();
    let size = format_size(bytes.len());
    if parts.status.is_server_error() {
        tracing::warn!(target: "http_access", "{} {} {} | {}ms | {}", status, method, uri.path(), elapsed, size);
    } else {
        tracing::info!(target: "http_access", "{} {} {} | {}ms | {}", status, method, uri.path(), elapsed, size);
    }

    Response::from_parts(parts, Body::from(bytes))
}
