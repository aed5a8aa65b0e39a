// tests/support/mocks/repos.rs
use async_trait::async_trait;
use showcase_admin::domain::{
    career::{Career, CareerId, CareerUpdate, NewCareer},
    category::{Category, CategoryId, CategoryRepository},
    errors::{DomainError, DomainResult},
    product::{NewProduct, Product, ProductId, ProductUpdate},
    shared::{Page, PageRequest, Record, RecordRepository, RecordTransaction},
    user::UserId,
};
use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

/// What the in-memory store needs to know about a record kind.
pub trait StoredRecord: Record {
    fn raw_id(id: Self::Id) -> i64;
    fn materialize(id: i64, draft: Self::Draft) -> Self;
    fn apply(&mut self, changes: Self::Changes);
    fn matches(&self, term: &str, category_names: &HashMap<i64, String>) -> bool;
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl StoredRecord for Career {
    fn raw_id(id: CareerId) -> i64 {
        id.into()
    }

    fn materialize(id: i64, draft: NewCareer) -> Self {
        Career {
            id: CareerId::new(id).expect("positive id"),
            title: draft.title,
            slug: draft.slug,
            cover: draft.cover,
            description: draft.description,
            requirements: draft.requirements,
            benefits: draft.benefits,
            how_to_apply: draft.how_to_apply,
            creator_id: draft.creator_id,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
        }
    }

    fn apply(&mut self, changes: CareerUpdate) {
        self.title = changes.title;
        self.slug = changes.slug;
        if let Some(cover) = changes.cover {
            self.cover = cover;
        }
        self.description = changes.description;
        self.requirements = changes.requirements;
        self.benefits = changes.benefits;
        self.how_to_apply = changes.how_to_apply;
        self.creator_id = changes.creator_id;
        self.updated_at = changes.updated_at;
    }

    fn matches(&self, term: &str, _category_names: &HashMap<i64, String>) -> bool {
        contains_ci(self.title.as_str(), term)
    }
}

impl StoredRecord for Product {
    fn raw_id(id: ProductId) -> i64 {
        id.into()
    }

    fn materialize(id: i64, draft: NewProduct) -> Self {
        Product {
            id: ProductId::new(id).expect("positive id"),
            name: draft.name,
            slug: draft.slug,
            cover: draft.cover,
            about: draft.about,
            category_id: draft.category_id,
            price: draft.price,
            creator_id: draft.creator_id,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
        }
    }

    fn apply(&mut self, changes: ProductUpdate) {
        self.name = changes.name;
        self.slug = changes.slug;
        if let Some(cover) = changes.cover {
            self.cover = cover;
        }
        self.about = changes.about;
        self.category_id = changes.category_id;
        self.price = changes.price;
        self.creator_id = changes.creator_id;
        self.updated_at = changes.updated_at;
    }

    fn matches(&self, term: &str, category_names: &HashMap<i64, String>) -> bool {
        let category = category_names
            .get(&i64::from(self.category_id))
            .map(|name| contains_ci(name, term))
            .unwrap_or(false);
        contains_ci(self.name.as_str(), term) || contains_ci(self.about.as_str(), term) || category
    }
}

struct Store<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
    begun: usize,
    committed: usize,
}

/// Owner-scoped record store whose transactions buffer writes until commit.
pub struct InMemoryRepo<T> {
    store: Arc<Mutex<Store<T>>>,
    category_names: HashMap<i64, String>,
    fail_writes: Arc<AtomicBool>,
}

impl<T> Clone for InMemoryRepo<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            category_names: self.category_names.clone(),
            fail_writes: Arc::clone(&self.fail_writes),
        }
    }
}

impl<T: StoredRecord> Default for InMemoryRepo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredRecord> InMemoryRepo<T> {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(Store {
                rows: BTreeMap::new(),
                next_id: 1,
                begun: 0,
                committed: 0,
            })),
            category_names: HashMap::new(),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_category_names(mut self, categories: &InMemoryCategories) -> Self {
        self.category_names = categories
            .all()
            .into_iter()
            .map(|c| (i64::from(c.id), c.name))
            .collect();
        self
    }

    /// Stores a fixture directly, bypassing transactions.
    pub fn seed(&self, record: T) -> T {
        let mut store = self.store.lock().unwrap();
        let id = T::raw_id(record.id());
        store.next_id = store.next_id.max(id + 1);
        store.rows.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.store.lock().unwrap().rows.get(&id).cloned()
    }

    pub fn all(&self) -> Vec<T> {
        self.store.lock().unwrap().rows.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.store.lock().unwrap().rows.len()
    }

    pub fn transactions_begun(&self) -> usize {
        self.store.lock().unwrap().begun
    }

    pub fn transactions_committed(&self) -> usize {
        self.store.lock().unwrap().committed
    }

    /// Makes every later insert and update fail inside its transaction.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }
}

pub struct InMemoryTx<T> {
    store: Arc<Mutex<Store<T>>>,
    pending: Vec<(i64, T)>,
    fail_writes: bool,
}

impl<T: StoredRecord> InMemoryTx<T> {
    fn staged(&self, id: i64) -> Option<T> {
        self.pending
            .iter()
            .rev()
            .find(|(pid, _)| *pid == id)
            .map(|(_, record)| record.clone())
    }
}

#[async_trait]
impl<T: StoredRecord> RecordTransaction<T> for InMemoryTx<T> {
    async fn insert(&mut self, draft: T::Draft) -> DomainResult<T> {
        if self.fail_writes {
            return Err(DomainError::Persistence("insert failed".into()));
        }
        let id = {
            let mut store = self.store.lock().unwrap();
            let id = store.next_id;
            store.next_id += 1;
            id
        };
        let record = T::materialize(id, draft);
        self.pending.push((id, record.clone()));
        Ok(record)
    }

    async fn update(&mut self, id: T::Id, changes: T::Changes) -> DomainResult<T> {
        if self.fail_writes {
            return Err(DomainError::Persistence("update failed".into()));
        }
        let raw = T::raw_id(id);
        let current = match self.staged(raw) {
            Some(record) => Some(record),
            None => self.store.lock().unwrap().rows.get(&raw).cloned(),
        };
        let mut record =
            current.ok_or_else(|| DomainError::NotFound(format!("{} {id} not found", T::KIND)))?;
        record.apply(changes);
        self.pending.push((raw, record.clone()));
        Ok(record)
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let InMemoryTx { store, pending, .. } = *self;
        let mut store = store.lock().unwrap();
        for (id, record) in pending {
            store.rows.insert(id, record);
        }
        store.committed += 1;
        Ok(())
    }
}

#[async_trait]
impl<T: StoredRecord> RecordRepository<T> for InMemoryRepo<T> {
    async fn begin(&self) -> DomainResult<Box<dyn RecordTransaction<T>>> {
        self.store.lock().unwrap().begun += 1;
        Ok(Box::new(InMemoryTx {
            store: Arc::clone(&self.store),
            pending: Vec::new(),
            fail_writes: self.fail_writes.load(Ordering::SeqCst),
        }))
    }

    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>> {
        Ok(self.get(T::raw_id(id)))
    }

    async fn list_page(
        &self,
        owner: UserId,
        search: Option<&str>,
        page: PageRequest,
    ) -> DomainResult<Page<T>> {
        let store = self.store.lock().unwrap();
        let matching: Vec<T> = store
            .rows
            .values()
            .filter(|r| r.creator_id() == owner)
            .filter(|r| search.is_none_or(|term| r.matches(term, &self.category_names)))
            .cloned()
            .collect();

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page() as usize)
            .collect();
        Ok(Page::new(items, total, page))
    }

    async fn delete(&self, id: T::Id) -> DomainResult<()> {
        let mut store = self.store.lock().unwrap();
        store
            .rows
            .remove(&T::raw_id(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("{} {id} not found", T::KIND)))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCategories {
    rows: Arc<Mutex<Vec<Category>>>,
}

impl InMemoryCategories {
    pub fn with(names: &[(i64, &str)]) -> Self {
        let rows = names
            .iter()
            .map(|(id, name)| Category {
                id: CategoryId::new(*id).expect("positive id"),
                name: name.to_string(),
            })
            .collect();
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }

    pub fn all(&self) -> Vec<Category> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        let mut rows = self.all();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then(i64::from(a.id).cmp(&i64::from(b.id))));
        Ok(rows)
    }

    async fn exists(&self, id: CategoryId) -> DomainResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|c| c.id == id))
    }
}
