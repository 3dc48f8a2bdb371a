//! 管理端：学历（Education）
//!
//! 学历是一个只有名称的字典实体，名称在全部学历中唯一。
//! 接口只暴露 `id` 与 `name`，审计字段不会出现在响应中。
//!
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use hrm_domain::validation::{
    In, Integer, Length, ParamRule, ParamRuleCollection, Positive, Required, Rule, StringType,
};
use hrm_macros::{entity, model};
use serde_json::{Value, json};
use tracing::debug;

use crate::command::Command;
use crate::command_handler::CommandHandler;
use crate::context::AppContext;
use crate::endpoint_result::{EndpointCollectionResult, EndpointResourceResult};
use crate::error::AppError;
use crate::query::Query;
use crate::query_handler::QueryHandler;

pub const PARAM_NAME: &str = "name";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_OFFSET: &str = "offset";
pub const PARAM_SORT_ORDER: &str = "sortOrder";

/// 学历名称的最大长度
pub const NAME_MAX_LENGTH: usize = 100;

/// 默认分页大小
pub const DEFAULT_LIMIT: usize = 50;

/// 学历实体
#[entity]
#[derive(PartialEq)]
pub struct Education {
    pub name: String,
    /// 审计字段：最后修改人
    #[attribute(skip)]
    pub modified_by: Option<i64>,
}

/// 学历模型（管理端）
#[model(entity = Education, filters = ["id", "name"], schema = "Admin-EducationModel")]
pub struct EducationModel;

/// 排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// 学历仓储（持久化层端口）
#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn find(&self, id: i64) -> Result<Option<Education>, AppError>;

    /// 按名称排序分页；返回 (本页记录, 总数)
    async fn search(
        &self,
        sort: SortOrder,
        limit: usize,
        offset: usize,
    ) -> Result<(Vec<Education>, usize), AppError>;

    /// 保存学历；`id == 0` 时分配新标识
    ///
    /// 名称在全部学历中唯一：名称已被其他记录占用时返回 [`AppError::Conflict`]，
    /// 唯一性检查与写入必须是同一个原子步骤。
    async fn save(&self, education: Education) -> Result<Education, AppError>;
}

/// 基于内存的学历仓储
///
/// `names` 为名称到标识的唯一索引，通过其条目锁完成「检查并占用名称」。
pub struct InMemoryEducationRepository {
    rows: DashMap<i64, Education>,
    names: DashMap<String, i64>,
    next_id: AtomicI64,
}

impl Default for InMemoryEducationRepository {
    fn default() -> Self {
        Self {
            rows: DashMap::new(),
            names: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryEducationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EducationRepository for InMemoryEducationRepository {
    async fn find(&self, id: i64) -> Result<Option<Education>, AppError> {
        Ok(self.rows.get(&id).map(|row| row.value().clone()))
    }

    async fn search(
        &self,
        sort: SortOrder,
        limit: usize,
        offset: usize,
    ) -> Result<(Vec<Education>, usize), AppError> {
        let mut all: Vec<Education> = self.rows.iter().map(|row| row.value().clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        if sort == SortOrder::Desc {
            all.reverse();
        }

        let total = all.len();
        let page = all.into_iter().skip(offset).take(limit).collect();
        Ok((page, total))
    }

    async fn save(&self, mut education: Education) -> Result<Education, AppError> {
        let previous_name = self
            .rows
            .get(&education.id)
            .map(|row| row.value().name.clone());

        // 持有条目锁期间不得再访问 names，否则同一分片会死锁
        {
            match self.names.entry(education.name.clone()) {
                Entry::Occupied(owner) => {
                    if *owner.get() != education.id {
                        return Err(AppError::Conflict(format!(
                            "education '{}' already exists",
                            education.name
                        )));
                    }
                }
                Entry::Vacant(slot) => {
                    if education.id == 0 {
                        education.id = self.next_id.fetch_add(1, Ordering::SeqCst);
                    }
                    slot.insert(education.id);
                }
            }
        }

        self.rows.insert(education.id, education.clone());

        if let Some(old) = previous_name.filter(|old| *old != education.name) {
            self.names.remove_if(&old, |_, owner| *owner == education.id);
        }
        Ok(education)
    }
}

// -------- queries --------

/// 按标识查询学历
#[derive(Debug, Clone, Copy)]
pub struct GetEducation {
    pub id: i64,
}

impl Query for GetEducation {
    const NAME: &'static str = "admin.education.get";
    type Dto = EndpointResourceResult;
}

/// 分页查询学历列表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEducations {
    pub limit: usize,
    pub offset: usize,
    pub sort_order: SortOrder,
}

impl Default for ListEducations {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
            sort_order: SortOrder::Asc,
        }
    }
}

impl ListEducations {
    pub fn param_rules() -> ParamRuleCollection {
        ParamRuleCollection::new(vec![
            ParamRule::new(PARAM_LIMIT)
                .rule(Integer)
                .rule(Positive)
                .optional(),
            ParamRule::new(PARAM_OFFSET)
                .rule(Integer)
                .rule(Positive.or(In::new([json!(0), json!("0")])))
                .optional(),
            ParamRule::new(PARAM_SORT_ORDER)
                .rule(In::new(["ASC", "DESC"]))
                .optional(),
        ])
    }

    /// 校验并解析查询参数（参数值可为整数或整数字符串）
    pub fn from_params(params: &Value) -> Result<Self, AppError> {
        Self::param_rules().validate(params)?;

        let mut query = Self::default();
        if let Some(limit) = params.get(PARAM_LIMIT).and_then(as_usize) {
            query.limit = limit;
        }
        if let Some(offset) = params.get(PARAM_OFFSET).and_then(as_usize) {
            query.offset = offset;
        }
        if params.get(PARAM_SORT_ORDER).and_then(Value::as_str) == Some("DESC") {
            query.sort_order = SortOrder::Desc;
        }
        Ok(query)
    }
}

impl Query for ListEducations {
    const NAME: &'static str = "admin.education.list";
    type Dto = EndpointCollectionResult;
}

fn as_usize(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub struct EducationQueryHandler<R> {
    repo: Arc<R>,
}

impl<R> EducationQueryHandler<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> QueryHandler<GetEducation> for EducationQueryHandler<R>
where
    R: EducationRepository + 'static,
{
    async fn handle(
        &self,
        ctx: &AppContext,
        q: GetEducation,
    ) -> Result<EndpointResourceResult, AppError> {
        debug!(
            query = GetEducation::NAME,
            correlation_id = ctx.correlation_id(),
            id = q.id,
            "handling query"
        );

        let education = self
            .repo
            .find(q.id)
            .await?
            .ok_or_else(|| AppError::RecordNotFound {
                resource: "Education",
                id: q.id.to_string(),
            })?;

        Ok(EndpointResourceResult::new(&EducationModel::new(&education))?)
    }
}

#[async_trait]
impl<R> QueryHandler<ListEducations> for EducationQueryHandler<R>
where
    R: EducationRepository + 'static,
{
    async fn handle(
        &self,
        ctx: &AppContext,
        q: ListEducations,
    ) -> Result<EndpointCollectionResult, AppError> {
        debug!(
            query = ListEducations::NAME,
            correlation_id = ctx.correlation_id(),
            limit = q.limit,
            offset = q.offset,
            "handling query"
        );

        let (rows, total) = self.repo.search(q.sort_order, q.limit, q.offset).await?;
        let result = EndpointCollectionResult::new(rows.iter().map(EducationModel::new))?;
        Ok(result.with_total(total))
    }
}

// -------- commands --------

/// 新建或更新学历
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveEducation {
    pub id: Option<i64>,
    pub name: String,
}

impl SaveEducation {
    pub fn param_rules() -> ParamRuleCollection {
        ParamRuleCollection::new(vec![
            ParamRule::new(PARAM_NAME)
                .rule(Required::default())
                .rule(StringType)
                .rule(Length::max(NAME_MAX_LENGTH)),
        ])
        .strict(true)
    }

    /// 在持久化之前校验请求负载；名称先去除首尾空白再校验
    pub fn from_payload(id: Option<i64>, payload: &Value) -> Result<Self, AppError> {
        let mut payload = payload.clone();
        if let Some(Value::String(name)) = payload.get_mut(PARAM_NAME) {
            *name = name.trim().to_string();
        }
        Self::param_rules().validate(&payload)?;

        let name = payload
            .get(PARAM_NAME)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Ok(Self { id, name })
    }
}

impl Command for SaveEducation {
    const NAME: &'static str = "admin.education.save";
    type Output = i64;
}

pub struct EducationCommandHandler<R> {
    repo: Arc<R>,
}

impl<R> EducationCommandHandler<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> CommandHandler<SaveEducation> for EducationCommandHandler<R>
where
    R: EducationRepository + 'static,
{
    async fn handle(&self, ctx: &AppContext, cmd: SaveEducation) -> Result<i64, AppError> {
        debug!(
            command = SaveEducation::NAME,
            correlation_id = ctx.correlation_id(),
            actor_id = ctx.actor_id(),
            "handling command"
        );

        let mut education = match cmd.id {
            Some(id) => self
                .repo
                .find(id)
                .await?
                .ok_or_else(|| AppError::RecordNotFound {
                    resource: "Education",
                    id: id.to_string(),
                })?,
            None => Education::default(),
        };

        education.name = cmd.name;
        education.modified_by = ctx.actor_id();

        let saved = self.repo.save(education).await?;
        Ok(saved.id)
    }
}
