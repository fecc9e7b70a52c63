use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, warn};
use url::Url;

use crate::{
    error::Error,
    protocol::{decode_notification, decode_reply, Request},
    public::{currency::Currency, ticker::Ticker},
};

/// One request/response exchange over its own connection.
pub struct Session {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl Session {
    pub async fn connect(ws_url: &Url) -> Result<Self, Error> {
        let (stream, _response) =
            connect_async(ws_url.as_str())
                .await
                .map_err(|source| Error::Connect {
                    url: ws_url.clone(),
                    source,
                })?;

        Ok(Self { stream })
    }

    pub async fn send(&mut self, request: &Request) -> Result<(), Error> {
        debug!(?request, "Send command to hitbtc web socket");
        let command = serde_json::to_string(request)
            .map_err(|e| Error::Decode(e, format!("{request:?}")))?;
        self.stream
            .send(Message::Text(command))
            .await
            .map_err(Error::Send)
    }

    /// Next text or binary frame. Control frames are skipped.
    pub async fn next_data_frame(&mut self) -> Result<String, Error> {
        while let Some(msg) = self.stream.next().await {
            match msg.map_err(Error::Receive)? {
                Message::Text(text) => return Ok(text),
                Message::Binary(bytes) => return Ok(String::from_utf8_lossy(&bytes).into_owned()),
                Message::Close(frame) => {
                    debug!(?frame, "Session closed by venue");
                    return Err(Error::StreamClosed);
                }
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => {}
            }
        }

        Err(Error::StreamClosed)
    }

    pub async fn close(mut self) {
        if let Err(e) = self.stream.close(None).await {
            debug!(%e, "Session close failed");
        }
    }
}

pub async fn get_currency(ws_url: &Url, currency: &str) -> Result<Currency, Error> {
    let mut session = Session::connect(ws_url).await?;
    let result = async {
        session.send(&Request::get_currency(currency)).await?;
        let text = session.next_data_frame().await?;
        debug!(%text, "Currency reply");
        decode_reply::<Currency>(&text)
    }
    .await;
    session.close().await;

    result
}

/// Subscribe, take the first ticker push and drop the session.
///
/// The first data frame after `subscribeTicker` is the subscription
/// acknowledgement; the ticker itself arrives as the following push.
pub async fn fetch_ticker(ws_url: &Url, symbol: &str) -> Result<Ticker, Error> {
    let mut session = Session::connect(ws_url).await?;
    let result = async {
        session.send(&Request::subscribe_ticker(symbol)).await?;

        let ack = session.next_data_frame().await?;
        if let Err(e @ Error::Rpc { .. }) = decode_reply::<serde_json::Value>(&ack) {
            warn!(symbol, %e, "Ticker subscription rejected");
            return Err(e);
        }

        let text = session.next_data_frame().await?;
        debug!(%text, "Ticker push");
        decode_notification::<Ticker>(&text)
    }
    .await;
    session.close().await;

    result
}
