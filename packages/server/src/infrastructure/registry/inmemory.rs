//! InMemory Connection Registry 実装
//!
//! ドメイン層が定義する ConnectionRegistry trait の具体的な実装。
//! `tokio::sync::Mutex` で保護した HashMap を唯一の共有状態として使用し、
//! 登録・削除・走査をすべて同じロックで直列化します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Connection, ConnectionId, ConnectionRegistry, PushError};

/// インメモリ Connection Registry 実装
#[derive(Default)]
pub struct InMemoryConnectionRegistry {
    /// 接続中のコネクション
    ///
    /// Key: ConnectionId
    /// Value: Connection
    connections: Mutex<HashMap<ConnectionId, Connection>>,
}

impl InMemoryConnectionRegistry {
    /// 空の InMemoryConnectionRegistry を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn add(&self, connection: Connection) {
        let id = connection.id();
        let mut connections = self.connections.lock().await;
        connections.insert(id, connection);
        tracing::debug!("Connection '{}' registered ({} total)", id, connections.len());
    }

    async fn remove(&self, id: &ConnectionId) -> bool {
        let mut connections = self.connections.lock().await;
        let removed = connections.remove(id).is_some();
        if removed {
            tracing::debug!(
                "Connection '{}' unregistered ({} remaining)",
                id,
                connections.len()
            );
        }
        removed
    }

    async fn mark_closing(&self, id: &ConnectionId) {
        let mut connections = self.connections.lock().await;
        if let Some(connection) = connections.get_mut(id) {
            connection.mark_closing();
        }
    }

    async fn for_each_open(
        &self,
        except: Option<&ConnectionId>,
        visit: &mut (dyn for<'c> FnMut(&'c Connection) + Send),
    ) {
        let connections = self.connections.lock().await;
        for (id, connection) in connections.iter() {
            if except == Some(id) {
                continue;
            }
            if !connection.is_open() {
                tracing::debug!(
                    "Skipping connection '{}' in state {:?}",
                    id,
                    connection.state()
                );
                continue;
            }
            visit(connection);
        }
    }

    async fn push_to(&self, id: &ConnectionId, payload: &str) -> Result<(), PushError> {
        let connections = self.connections.lock().await;
        let connection = connections
            .get(id)
            .ok_or_else(|| PushError::ConnectionNotFound(id.to_string()))?;
        connection.send(payload)
    }

    async fn count(&self) -> usize {
        self.connections.lock().await.len()
    }
}
