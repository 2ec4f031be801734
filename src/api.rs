// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{self, Config};
use crate::error::LedgerError;
use crate::models::{
    Category, CategoryBreakdown, MonthlySummary, Report, Transaction, TransactionData,
    TransactionType, UserProfile, UserRole,
};
use crate::utils::http_client;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Blocking client for the remote ledger service. Calls are one-shot: a
/// rejected operation is surfaced as [`LedgerError::RemoteOperationFailed`]
/// and never retried here. After any successful mutation the caller's
/// in-memory transaction set is stale and must be re-fetched.
pub struct LedgerClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

fn remote(e: reqwest::Error) -> LedgerError {
    LedgerError::RemoteOperationFailed(e.to_string())
}

impl LedgerClient {
    pub fn new(cfg: &Config) -> Result<Self, LedgerError> {
        let http = http_client().map_err(|e| LedgerError::RemoteOperationFailed(e.to_string()))?;
        Ok(Self {
            http,
            base_url: cfg.service_url.trim_end_matches('/').to_string(),
            token: cfg.token.clone(),
        })
    }

    /// Client from the saved connection config; [`LedgerError::ServiceUnavailable`]
    /// when `rupeeclip connect` has never been run.
    pub fn from_config() -> Result<Self, LedgerError> {
        match config::load() {
            Ok(Some(cfg)) => Self::new(&cfg),
            _ => Err(LedgerError::ServiceUnavailable),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authed(&self, req: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    fn run(
        &self,
        req: reqwest::blocking::RequestBuilder,
    ) -> Result<reqwest::blocking::Response, LedgerError> {
        let resp = self.authed(req).send().map_err(remote)?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            let detail = body.trim();
            return Err(LedgerError::RemoteOperationFailed(if detail.is_empty() {
                status.to_string()
            } else {
                format!("{}: {}", status, detail)
            }));
        }
        Ok(resp)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, LedgerError> {
        let req = self.http.get(self.url(path)).query(query);
        self.run(req)?.json().map_err(remote)
    }

    pub fn add_transaction(&self, data: &TransactionData) -> Result<i64, LedgerError> {
        let req = self.http.post(self.url("transactions")).json(data);
        self.run(req)?.json().map_err(remote)
    }

    pub fn get_transaction(&self, id: i64) -> Result<Transaction, LedgerError> {
        self.get_json(&format!("transactions/{}", id), &[])
    }

    pub fn get_user_transactions(&self) -> Result<Vec<Transaction>, LedgerError> {
        self.get_json("transactions", &[])
    }

    pub fn update_transaction(&self, id: i64, data: &TransactionData) -> Result<(), LedgerError> {
        let req = self
            .http
            .put(self.url(&format!("transactions/{}", id)))
            .json(data);
        self.run(req).map(|_| ())
    }

    /// Deleting an unknown id is an error, not a no-op.
    pub fn delete_transaction(&self, id: i64) -> Result<(), LedgerError> {
        let req = self.http.delete(self.url(&format!("transactions/{}", id)));
        self.run(req).map(|_| ())
    }

    pub fn generate_report(&self, start_ns: i64, end_ns: i64) -> Result<Report, LedgerError> {
        self.get_json(
            "reports",
            &[("start", start_ns.to_string()), ("end", end_ns.to_string())],
        )
    }

    pub fn get_monthly_stats(&self, year: i32, month: u32) -> Result<MonthlySummary, LedgerError> {
        self.get_json(
            "stats/monthly",
            &[("year", year.to_string()), ("month", month.to_string())],
        )
    }

    pub fn get_category_stats(
        &self,
        start_ns: i64,
        end_ns: i64,
    ) -> Result<CategoryBreakdown, LedgerError> {
        self.get_json(
            "stats/categories",
            &[("start", start_ns.to_string()), ("end", end_ns.to_string())],
        )
    }

    pub fn get_transactions_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Transaction>, LedgerError> {
        self.get_json("transactions", &[("category", category.as_str().to_string())])
    }

    pub fn get_transactions_by_type(
        &self,
        transaction_type: TransactionType,
    ) -> Result<Vec<Transaction>, LedgerError> {
        self.get_json(
            "transactions",
            &[("type", transaction_type.as_str().to_string())],
        )
    }

    pub fn get_transactions_in_date_range(
        &self,
        start_ns: i64,
        end_ns: i64,
    ) -> Result<Vec<Transaction>, LedgerError> {
        self.get_json(
            "transactions",
            &[("start", start_ns.to_string()), ("end", end_ns.to_string())],
        )
    }

    /// `None` signals the caller still needs onboarding.
    pub fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, LedgerError> {
        self.get_json("profile", &[])
    }

    pub fn save_caller_user_profile(&self, profile: &UserProfile) -> Result<(), LedgerError> {
        let req = self.http.put(self.url("profile")).json(profile);
        self.run(req).map(|_| ())
    }

    pub fn get_user_profile(&self, principal: &str) -> Result<Option<UserProfile>, LedgerError> {
        self.get_json(&format!("users/{}/profile", principal), &[])
    }

    pub fn get_caller_user_role(&self) -> Result<UserRole, LedgerError> {
        self.get_json("role", &[])
    }

    pub fn is_caller_admin(&self) -> Result<bool, LedgerError> {
        self.get_json("role/admin", &[])
    }

    pub fn assign_user_role(&self, principal: &str, role: UserRole) -> Result<(), LedgerError> {
        #[derive(Serialize)]
        struct Assignment<'a> {
            user: &'a str,
            role: UserRole,
        }
        let req = self
            .http
            .post(self.url("roles"))
            .json(&Assignment { user: principal, role });
        self.run(req).map(|_| ())
    }
}
