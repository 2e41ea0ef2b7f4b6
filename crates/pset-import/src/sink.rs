//! Destination for imported records.

use std::future::Future;

use pset_core::entities::{Problem, Task};
use pset_db::error::DatabaseError;
use pset_db::repos::problem::NewProblem;
use pset_db::repos::task::NewTask;
use pset_db::service::PsetService;

/// Where an import writes its task and problems.
///
/// Each call is an independent write; there is no batch transaction.
pub trait ProblemSink: Send + Sync {
    fn insert_task(&self, task: NewTask) -> impl Future<Output = Result<Task, DatabaseError>> + Send;

    fn insert_problem(
        &self,
        problem: NewProblem,
    ) -> impl Future<Output = Result<Problem, DatabaseError>> + Send;
}

impl ProblemSink for PsetService {
    fn insert_task(&self, task: NewTask) -> impl Future<Output = Result<Task, DatabaseError>> + Send {
        self.create_task(task)
    }

    fn insert_problem(
        &self,
        problem: NewProblem,
    ) -> impl Future<Output = Result<Problem, DatabaseError>> + Send {
        self.store_problem(problem)
    }
}

impl<T: ProblemSink> ProblemSink for &T {
    fn insert_task(&self, task: NewTask) -> impl Future<Output = Result<Task, DatabaseError>> + Send {
        (**self).insert_task(task)
    }

    fn insert_problem(
        &self,
        problem: NewProblem,
    ) -> impl Future<Output = Result<Problem, DatabaseError>> + Send {
        (**self).insert_problem(problem)
    }
}
