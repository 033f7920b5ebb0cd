//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `ranking_core::storage`.
//! Transport failures become `ConnectionFailed`, service rejections
//! become `QueryFailed`. Nothing is retried here.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use ranking_core::storage::RepositoryError;

/// Splits transport-level failures from service errors.
fn transport_error<E, R>(err: SdkError<E, R>) -> Result<E, RepositoryError>
where
    E: Debug,
    R: Debug,
{
    match err {
        SdkError::ServiceError(service) => Ok(service.into_err()),
        SdkError::DispatchFailure(e) => Err(RepositoryError::ConnectionFailed(format!(
            "dispatch failure: {e:?}"
        ))),
        SdkError::TimeoutError(_) => Err(RepositoryError::ConnectionFailed(
            "request timed out".to_string(),
        )),
        other => Err(RepositoryError::QueryFailed(format!("{other:?}"))),
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
    id: &str,
) -> RepositoryError {
    match transport_error(err) {
        Err(e) => e,
        Ok(GetItemError::ResourceNotFoundException(_)) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        Ok(GetItemError::ProvisionedThroughputExceededException(_)) => {
            RepositoryError::QueryFailed("Throughput exceeded".to_string())
        }
        Ok(GetItemError::RequestLimitExceeded(_)) => {
            RepositoryError::QueryFailed("Request limit exceeded".to_string())
        }
        Ok(GetItemError::InternalServerError(_)) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        Ok(err) => RepositoryError::QueryFailed(format!("GetItem {id} failed: {err:?}")),
    }
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    match transport_error(err) {
        Err(e) => e,
        Ok(QueryError::ResourceNotFoundException(_)) => {
            RepositoryError::QueryFailed("Table or index not found".to_string())
        }
        Ok(QueryError::ProvisionedThroughputExceededException(_)) => {
            RepositoryError::QueryFailed("Throughput exceeded".to_string())
        }
        Ok(QueryError::RequestLimitExceeded(_)) => {
            RepositoryError::QueryFailed("Request limit exceeded".to_string())
        }
        Ok(QueryError::InternalServerError(_)) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        Ok(err) => RepositoryError::QueryFailed(format!("Query failed: {err:?}")),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    id: &str,
) -> RepositoryError {
    match transport_error(err) {
        Err(e) => e,
        Ok(PutItemError::ResourceNotFoundException(_)) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        Ok(PutItemError::ProvisionedThroughputExceededException(_)) => {
            RepositoryError::QueryFailed("Throughput exceeded".to_string())
        }
        Ok(PutItemError::RequestLimitExceeded(_)) => {
            RepositoryError::QueryFailed("Request limit exceeded".to_string())
        }
        Ok(PutItemError::ItemCollectionSizeLimitExceededException(_)) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        Ok(PutItemError::TransactionConflictException(_)) => {
            RepositoryError::QueryFailed("Transaction conflict".to_string())
        }
        Ok(PutItemError::InternalServerError(_)) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        Ok(err) => RepositoryError::QueryFailed(format!("PutItem {id} failed: {err:?}")),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    id: &str,
) -> RepositoryError {
    match transport_error(err) {
        Err(e) => e,
        Ok(DeleteItemError::ResourceNotFoundException(_)) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        Ok(DeleteItemError::ProvisionedThroughputExceededException(_)) => {
            RepositoryError::QueryFailed("Throughput exceeded".to_string())
        }
        Ok(DeleteItemError::RequestLimitExceeded(_)) => {
            RepositoryError::QueryFailed("Request limit exceeded".to_string())
        }
        Ok(DeleteItemError::TransactionConflictException(_)) => {
            RepositoryError::QueryFailed("Transaction conflict".to_string())
        }
        Ok(DeleteItemError::InternalServerError(_)) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        Ok(err) => RepositoryError::QueryFailed(format!("DeleteItem {id} failed: {err:?}")),
    }
}
