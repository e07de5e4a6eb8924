use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncTaskStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
}

impl SyncTaskStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SyncTaskStatus::Completed | SyncTaskStatus::Failed | SyncTaskStatus::Cancelled
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            SyncTaskStatus::Pending => "Pending",
            SyncTaskStatus::Running => "Running",
            SyncTaskStatus::Completed => "Completed",
            SyncTaskStatus::Failed => "Failed",
            SyncTaskStatus::Cancelled => "Cancelled",
        }
    }
}

/// Прогресс одной задачи синхронизации (`GET /api/sync/status`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncTask {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub store_id: Option<i64>,
    #[serde(default)]
    pub store_name: Option<String>,
    pub status: SyncTaskStatus,
    #[serde(default)]
    pub processed: i64,
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
}

impl SyncTask {
    /// Percent done, `None` while the total is unknown.
    pub fn percent(&self) -> Option<u8> {
        let total = self.total.filter(|t| *t > 0)?;
        let pct = (self.processed.max(0) as f64 / total as f64 * 100.0).round();
        Some(pct.min(100.0) as u8)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncStatusResponse {
    #[serde(default)]
    pub tasks: Vec<SyncTask>,
}

impl SyncStatusResponse {
    /// Опрос можно прекращать: все задачи в терминальном состоянии (или задач нет)
    pub fn all_terminal(&self) -> bool {
        self.tasks.iter().all(|t| t.status.is_terminal())
    }

    pub fn running_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.status.is_terminal()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(status: SyncTaskStatus, processed: i64, total: Option<i64>) -> SyncTask {
        SyncTask {
            id: "t1".into(),
            kind: "orders".into(),
            store_id: Some(1),
            store_name: None,
            status,
            processed,
            total,
            message: None,
            started_at: None,
            finished_at: None,
        }
    }

    #[test]
    fn test_all_terminal() {
        let mut resp = SyncStatusResponse {
            tasks: vec![
                task(SyncTaskStatus::Completed, 10, Some(10)),
                task(SyncTaskStatus::Running, 3, Some(10)),
            ],
        };
        assert!(!resp.all_terminal());
        assert_eq!(resp.running_count(), 1);

        resp.tasks[1].status = SyncTaskStatus::Failed;
        assert!(resp.all_terminal());
        assert!(SyncStatusResponse::default().all_terminal());
    }

    #[test]
    fn test_percent() {
        assert_eq!(task(SyncTaskStatus::Running, 1, Some(3)).percent(), Some(33));
        assert_eq!(task(SyncTaskStatus::Running, 5, Some(4)).percent(), Some(100));
        assert_eq!(task(SyncTaskStatus::Pending, 0, None).percent(), None);
        assert_eq!(task(SyncTaskStatus::Pending, 0, Some(0)).percent(), None);
    }

    #[test]
    fn test_decode_status() {
        let resp: SyncStatusResponse = serde_json::from_str(
            r#"{"tasks":[{"id":"a","kind":"inventory","status":"pending"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.tasks[0].status, SyncTaskStatus::Pending);
    }
}
