use std::cell::RefCell;
use std::rc::{Rc, Weak};

use kinship_core::{DomainError, DomainResult, Entity, PersonId};
use kinship_jobs::Job;

/// Youngest age at which a person may hold a job.
pub const MIN_WORKING_AGE: u32 = 16;

/// Youngest age at which a person may have a spouse.
pub const MIN_MARRIAGE_AGE: u32 = 18;

/// Shared, mutable handle to a person.
pub type SharedPerson = Rc<RefCell<Person>>;

/// Entity: Person.
#[derive(Debug)]
pub struct Person {
    id: PersonId,
    first_name: String,
    last_name: String,
    age: u32,
    job: Option<Job>,
    spouse: Option<SpouseLink>,
}

/// Non-owning spouse link. The first name is read when the link is made so
/// the person can still be described while the spouse is mutably borrowed.
#[derive(Debug)]
struct SpouseLink {
    person: Weak<RefCell<Person>>,
    first_name: Option<String>,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            id: PersonId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            job: None,
            spouse: None,
        }
    }

    /// Build a person already wrapped in a [`SharedPerson`] handle.
    pub fn shared(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> SharedPerson {
        Rc::new(RefCell::new(Self::new(first_name, last_name, age)))
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    /// Mutable access for raises.
    pub fn job_mut(&mut self) -> Option<&mut Job> {
        self.job.as_mut()
    }

    /// Assign (or clear) the job.
    ///
    /// Under [`MIN_WORKING_AGE`] the job is cleared right after being stored.
    pub fn set_job(&mut self, job: Option<Job>) {
        self.job = job;
        if self.age < MIN_WORKING_AGE && self.job.is_some() {
            tracing::debug!(person = %self.id, age = self.age, "too young for a job; cleared");
            self.job = None;
        }
    }

    /// Like [`set_job`](Self::set_job), but an under-age assignment is rejected
    /// and the current job is left as it was.
    pub fn try_set_job(&mut self, job: Job) -> DomainResult<()> {
        if self.age < MIN_WORKING_AGE {
            tracing::debug!(person = %self.id, age = self.age, "job rejected; too young");
            return Err(DomainError::invariant(format!(
                "{} is {} and cannot hold a job before {MIN_WORKING_AGE}",
                self.first_name, self.age
            )));
        }
        self.job = Some(job);
        Ok(())
    }

    /// Current spouse, if one is linked and still alive.
    pub fn spouse(&self) -> Option<SharedPerson> {
        self.spouse.as_ref().and_then(|link| link.person.upgrade())
    }

    pub fn has_spouse(&self) -> bool {
        self.spouse().is_some()
    }

    /// Link (or unlink) a spouse. Only this side of the relation changes.
    ///
    /// Under [`MIN_MARRIAGE_AGE`] the link is cleared right after being stored.
    pub fn set_spouse(&mut self, spouse: Option<&SharedPerson>) {
        self.spouse = spouse.map(|spouse| self.link_to(spouse));
        if self.age < MIN_MARRIAGE_AGE && self.spouse.is_some() {
            tracing::debug!(person = %self.id, age = self.age, "too young to marry; spouse cleared");
            self.spouse = None;
        }
    }

    /// Like [`set_spouse`](Self::set_spouse), but an under-age link is rejected
    /// and the current spouse is left as it was.
    pub fn try_set_spouse(&mut self, spouse: &SharedPerson) -> DomainResult<()> {
        if self.age < MIN_MARRIAGE_AGE {
            tracing::debug!(person = %self.id, age = self.age, "spouse rejected; too young");
            return Err(DomainError::invariant(format!(
                "{} is {} and cannot marry before {MIN_MARRIAGE_AGE}",
                self.first_name, self.age
            )));
        }
        self.spouse = Some(self.link_to(spouse));
        Ok(())
    }

    /// Human-readable summary of the person, their job and spouse.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn link_to(&self, spouse: &SharedPerson) -> SpouseLink {
        SpouseLink {
            person: Rc::downgrade(spouse),
            first_name: self.first_name_of(spouse),
        }
    }

    /// First name of `other` without panicking on a held borrow.
    fn first_name_of(&self, other: &SharedPerson) -> Option<String> {
        // A person linked to themselves may already be mutably borrowed.
        if core::ptr::eq(other.as_ptr(), self) {
            return Some(self.first_name.clone());
        }
        other.try_borrow().ok().map(|p| p.first_name.clone())
    }

    fn spouse_name(&self) -> Option<String> {
        let link = self.spouse.as_ref()?;
        let spouse = link.person.upgrade()?;
        self.first_name_of(&spouse).or_else(|| link.first_name.clone())
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let job = self
            .job
            .as_ref()
            .map_or_else(|| "nil".to_string(), ToString::to_string);
        let spouse = self.spouse_name().unwrap_or_else(|| "nil".to_string());
        write!(
            f,
            "[Person: firstName:{} lastName:{} age:{} job:{} spouse:{}]",
            self.first_name, self.last_name, self.age, job, spouse
        )
    }
}
