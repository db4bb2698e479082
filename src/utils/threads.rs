//! 并发控制工具

use futures::StreamExt;
use futures::stream;
use std::future::Future;

/// 以限定并发度执行一组异步任务
///
/// 结果顺序与输入顺序一致，limit为0时按1处理。
pub async fn do_parallel_with_limit<F, T>(futures: Vec<F>, limit: usize) -> Vec<T>
where
    F: Future<Output = T>,
{
    stream::iter(futures)
        .buffered(limit.max(1))
        .collect()
        .await
}
